fn main() {
    chess_coach::cli::run_loop();
}
