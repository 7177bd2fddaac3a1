use leptos::prelude::*;
use readycheck_web::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("error initializing logger");
    tracing::info!("ReadyCheck starting");
    mount_to_body(App);
}
