fn main() {
    bistro::app::cli::run();
}
