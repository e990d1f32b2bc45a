use std::io::{self, Write};

use lifo_stack::Stack;
use tracing_subscriber::EnvFilter;

// Push 3, 2, 1 and drain the stack, printing each top as it goes.
fn run<W: Write>(out: &mut W) -> anyhow::Result<()> {
    let mut stack = Stack::new();
    stack.push(3);
    stack.push(2);
    stack.push(1);

    while !stack.is_empty() {
        write!(out, "{} ", stack.top()?)?;
        stack.pop();
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(&mut handle)?;
    handle.flush()?;

    Ok(())
}
