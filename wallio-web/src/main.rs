fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(wallio_web::App);
}
