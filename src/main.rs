fn main() {
    dcgen::app::cli::run();
}
