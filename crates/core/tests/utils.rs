//! Tests for the string helpers.

use dynasty_core::utils::{expand_env_vars, slugify};

#[test]
fn unknown_variables_expand_to_nothing() {
    assert_eq!(expand_env_vars("a${DYNASTY_SURELY_UNSET_VAR}b"), "ab");
    assert_eq!(expand_env_vars("no vars here"), "no vars here");
    assert_eq!(expand_env_vars("cost: $999"), "cost: $999");
}

#[test]
fn slugs() {
    assert_eq!(slugify("Web Development"), "web-development");
    assert_eq!(slugify("E-commerce Solutions"), "e-commerce-solutions");
    assert_eq!(slugify("Other"), "other");
}
