fn main() {
    if let Err(err) = canvas2html::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
