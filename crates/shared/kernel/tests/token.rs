use lcomp_kernel::domain::account::Role;
use lcomp_kernel::domain::config::JwtConfig;
use lcomp_kernel::security::SecurityError;
use lcomp_kernel::security::token::TokenIssuer;

fn jwt(secret: &str, audience: Option<&str>) -> JwtConfig {
    JwtConfig {
        secret: secret.to_owned(),
        issuer: "lcomp".to_owned(),
        audience: audience.map(str::to_owned),
        ttl_seconds: 900,
        clock_skew_seconds: 30,
    }
}

#[test]
fn issued_token_round_trips_claims() {
    let issuer = TokenIssuer::new(jwt("secret", Some("lcomp-web"))).unwrap();
    let token = issuer.issue("42", Role::Admin).unwrap();

    let claims = issuer.verify(&token).unwrap();
    assert_eq!(claims.sub, "42");
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.iss, "lcomp");
    assert_eq!(claims.aud.as_deref(), Some("lcomp-web"));
    assert_eq!(claims.exp - claims.iat, 900);
    assert_eq!(issuer.ttl_seconds(), 900);
}

#[test]
fn foreign_signature_is_rejected() {
    let ours = TokenIssuer::new(jwt("ours", None)).unwrap();
    let theirs = TokenIssuer::new(jwt("theirs", None)).unwrap();

    let token = theirs.issue("1", Role::User).unwrap();
    assert!(matches!(ours.verify(&token), Err(SecurityError::Token { .. })));
}

#[test]
fn audience_mismatch_is_rejected() {
    let web = TokenIssuer::new(jwt("shared", Some("web"))).unwrap();
    let mobile = TokenIssuer::new(jwt("shared", Some("mobile"))).unwrap();

    let token = web.issue("1", Role::User).unwrap();
    assert!(mobile.verify(&token).is_err());
}

#[test]
fn garbage_is_rejected() {
    let issuer = TokenIssuer::new(jwt("secret", None)).unwrap();
    assert!(issuer.verify("not.a.jwt").is_err());
    assert!(issuer.verify("").is_err());
}

#[test]
fn unusable_settings_are_refused() {
    assert!(matches!(TokenIssuer::new(jwt("", None)), Err(SecurityError::Configuration { .. })));

    let mut zero_ttl = jwt("secret", None);
    zero_ttl.ttl_seconds = 0;
    assert!(TokenIssuer::new(zero_ttl).is_err());
}
