use crate::is_valid_email;

use googletest::prelude::*;

#[test]
fn given_minimal_address_when_checked_then_valid() {
    assert_that!(is_valid_email("a@b.co"), eq(true));
}

#[test]
fn given_common_addresses_when_checked_then_valid() {
    for email in [
        "john.doe@example.com",
        "first+tag@sub.domain.org",
        "under_score%x@my-host.io",
    ] {
        assert_that!(is_valid_email(email), eq(true));
    }
}

#[test]
fn given_missing_tld_when_checked_then_invalid() {
    assert_that!(is_valid_email("a@b"), eq(false));
}

#[test]
fn given_missing_at_when_checked_then_invalid() {
    assert_that!(is_valid_email("a.com"), eq(false));
}

#[test]
fn given_empty_local_part_when_checked_then_invalid() {
    assert_that!(is_valid_email("@b.com"), eq(false));
}

#[test]
fn given_single_letter_tld_when_checked_then_invalid() {
    assert_that!(is_valid_email("a@b.c"), eq(false));
}

#[test]
fn given_whitespace_when_checked_then_invalid() {
    assert_that!(is_valid_email("john doe@example.com"), eq(false));
    assert_that!(is_valid_email(" john@example.com"), eq(false));
}
