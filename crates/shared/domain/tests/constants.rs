use lcomp_domain::account::Role;
use lcomp_domain::constants::{APP_NAME, AUTHORITY_PREFIX, ENV_PREFIX, USER};

#[test]
fn constants_match_public_strings() {
    assert_eq!(APP_NAME, "Login Components");
    assert_eq!(USER, "user");
    assert_eq!(ENV_PREFIX, "LCOMP");
    assert!(Role::Moderator.authority().starts_with(AUTHORITY_PREFIX));
}
