use anyhow::Result;
use wordcut::app::App;

fn main() -> Result<()> {
    // Parse flags, load config and truncate stdin or the given text
    App::from_env()
}
