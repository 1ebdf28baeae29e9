fn main() {
    drenv::app::cli::run();
}
