mod logger;

fn main() {
    logger::init_logger();

    let code = realign::run(std::env::args_os().skip(1));
    std::process::exit(code);
}
