mod entry;
mod logger;

use universe_insights::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
