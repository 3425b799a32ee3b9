//! `help`, `echo`, `clear`, `mem`, `run`, `reset`, `save`, `load`

use crate::commands::{CommandContext, Program};
use crate::error::CommandResult;
use crate::io::{FS_KEY, MEMORY_KEY};

pub(crate) const HELP_COMMANDS: &str = "Commands: help, ls, cat, pwd, cd, echo, scan, connect, disconnect, rm, changeAuth, run, mem, clear, whoami, save, load, reset";
pub(crate) const HELP_EXAMPLES: &str = "Ex: ls, cat readme.txt, cd intro, cd ../, scan, connect <1.2.0.7> <name> <?password>, changeAuth <admin | user | guest> <?password>, run tracer";
pub(crate) const WORK_IN_PROGRESS: &str = "work in progress...";

pub async fn help(_args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    ctx.write(HELP_COMMANDS);
    ctx.write(HELP_EXAMPLES);
    Ok(())
}

pub async fn echo(args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    ctx.write(args.join(" "));
    Ok(())
}

pub async fn clear(_args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    ctx.console.clear();
    Ok(())
}

pub async fn mem(_args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    let memory = *ctx.session.memory();
    ctx.write(format!("Memory: {}/{} MB used", memory.used(), memory.total()));
    Ok(())
}

pub async fn run(args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    let name = args.first().map(String::as_str).unwrap_or("");
    let Some(program) = Program::parse(name) else {
        ctx.write(format!(
            "Error run: unknown program \"{}\" (available: ping, tracer)",
            name
        ));
        return Ok(());
    };

    let cost = program.memory_cost();
    if !ctx.session.memory_mut().allocate(cost) {
        ctx.write(format!("run: not enough memory for {} (needs {} MB)", program, cost));
        return Ok(());
    }

    ctx.write(format!("Launching {}... (uses {} MB)", program, cost));
    ctx.refresh_memory();
    let wait = ctx.jittered(ctx.latency.run_base_ms, ctx.latency.run_jitter_ms);
    ctx.delay(wait).await;
    ctx.write(format!("{}: done.", program));

    ctx.session.memory_mut().free(cost);
    ctx.refresh_memory();
    Ok(())
}

pub async fn reset(_args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    ctx.session.memory_mut().reset();
    ctx.refresh_memory();
    ctx.store.delete(FS_KEY).await?;
    ctx.store.delete(MEMORY_KEY).await?;
    ctx.write("Reset: memory cleared and saved state removed.");
    Ok(())
}

pub async fn save(_args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    ctx.write(WORK_IN_PROGRESS);
    Ok(())
}

pub async fn load(_args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    ctx.write(WORK_IN_PROGRESS);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::fixture::Fixture;
    use super::*;
    use crate::io::{Console, KeyValueStore};

    #[tokio::test]
    async fn test_help_and_echo() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("help").await, vec![HELP_COMMANDS, HELP_EXAMPLES]);
        assert_eq!(fx.run("echo hello   there").await, vec!["hello there"]);
        assert_eq!(fx.run("echo").await, vec![""]);
    }

    #[tokio::test]
    async fn test_clear() {
        let mut fx = Fixture::new();
        fx.console.write_line("stale");
        assert!(fx.run("clear").await.is_empty());
        assert_eq!(fx.console.clear_count(), 1);
    }

    #[tokio::test]
    async fn test_run_allocates_then_frees() {
        let mut fx = Fixture::new();

        assert_eq!(
            fx.run("run tracer").await,
            vec!["Launching tracer... (uses 256 MB)", "tracer: done."]
        );
        assert_eq!(fx.session.memory().used(), 0);
        assert_eq!(fx.console.memory().map(|m| m.used()), Some(0));
        assert_eq!(fx.clock.delays(), vec![1500]);
        assert_eq!(fx.run("mem").await, vec!["Memory: 0/512 MB used"]);
    }

    #[tokio::test]
    async fn test_run_not_enough_memory() {
        let mut fx = Fixture::new();
        fx.session.memory_mut().allocate(300);

        assert_eq!(
            fx.run("run tracer").await,
            vec!["run: not enough memory for tracer (needs 256 MB)"]
        );
        assert_eq!(fx.session.memory().used(), 300);
        assert!(fx.clock.delays().is_empty());

        assert_eq!(fx.run("run ping").await.len(), 2);
        assert_eq!(fx.session.memory().used(), 300);
    }

    #[tokio::test]
    async fn test_run_unknown_program() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run("run nmap").await,
            vec!["Error run: unknown program \"nmap\" (available: ping, tracer)"]
        );
        assert_eq!(
            fx.run("run").await,
            vec!["Error run: unknown program \"\" (available: ping, tracer)"]
        );
    }

    #[tokio::test]
    async fn test_reset_clears_memory_and_store() {
        let mut fx = Fixture::new();
        fx.session.memory_mut().allocate(128);
        fx.store.put(FS_KEY, serde_json::json!({})).await.unwrap();
        fx.store.put(MEMORY_KEY, serde_json::json!({})).await.unwrap();
        fx.store.put("other", serde_json::json!(1)).await.unwrap();

        assert_eq!(
            fx.run("reset").await,
            vec!["Reset: memory cleared and saved state removed."]
        );
        assert_eq!(fx.session.memory().used(), 0);
        assert!(!fx.store.contains(FS_KEY));
        assert!(!fx.store.contains(MEMORY_KEY));
        assert!(fx.store.contains("other"));
    }

    #[tokio::test]
    async fn test_save_load_stubs() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("save").await, vec![WORK_IN_PROGRESS]);
        assert_eq!(fx.run("load").await, vec![WORK_IN_PROGRESS]);
        assert!(fx.store.is_empty());
    }
}
