use busline::app::BuslineApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = BuslineApp::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running busline: {e}");
            std::process::exit(1);
        }
    }
}
