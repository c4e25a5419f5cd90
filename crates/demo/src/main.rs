fn main() -> anyhow::Result<()> {
    pressroom_observability::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    pressroom_demo::run(&mut out)
}
