fn main() {
    std::process::exit(simplecross::cli::main());
}
