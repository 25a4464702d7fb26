use doer_mock::{RealDoer, User};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("start");

    let doer = RealDoer::new();
    let user = User::new(&doer);

    if let Err(err) = user.use_doer() {
        println!("{}", err);
    }

    println!("end");

    Ok(())
}
