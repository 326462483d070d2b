use marketplace_pwa::config::CONFIG;
use marketplace_pwa::views::App;

fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🛒 Marketplace arrancando en entorno {}", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
