use lcomp_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_install_reports_subscriber_error() {
    let _first = Logger::builder()
        .name("lcomp-first")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("lcomp-second")
        .level(LevelFilter::DEBUG)
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
