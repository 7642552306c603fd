#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use lcomp::features::landing::App;
use lcomp_desktop::DesktopApp;
use lcomp_logger::Logger;

fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).init()?;

    DesktopApp::new().launch(App);

    Ok(())
}
