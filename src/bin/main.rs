// Browser entry point for the storefront banner (client-side rendered).

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(storefront_banner::App);
}
