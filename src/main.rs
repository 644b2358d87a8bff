fn main() {
    newsdesk_ui::run();
}
