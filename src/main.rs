fn main() {
    penh::app::cli::run();
}
