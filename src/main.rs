fn main() {
    memebot::app::cli::run();
}
