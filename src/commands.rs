use std::io::Write;
use denko::{Inventory, title_case};
use denko::output::{self, OutputMode, emit_success};

/// What every command handler needs: the open inventory and the output mode.
pub struct CommandContext<'a> {
    pub inventory: &'a Inventory,
    pub mode: OutputMode,
}

pub fn run_create<W: Write>(
    ctx: &CommandContext,
    out: &mut W,
    item: &str,
    amount: &str,
    namespace: Option<&str>,
) -> anyhow::Result<()> {
    let record = ctx.inventory.create(item, amount, namespace)?;
    tracing::info!("Tracking {} in {}", record.item, record.namespace);

    if !ctx.mode.is_human() {
        emit_success(out, "create", &record)?;
    }
    Ok(())
}

pub fn run_list<W: Write>(ctx: &CommandContext, out: &mut W) -> anyhow::Result<()> {
    let records = ctx.inventory.list()?;

    if ctx.mode.is_human() {
        output::render_list(out, &records)?;
    } else {
        emit_success(out, "list", &records)?;
    }
    Ok(())
}

pub fn run_update<W: Write>(ctx: &CommandContext, out: &mut W, item: &str, amount: &str) -> anyhow::Result<()> {
    let updated = ctx.inventory.update(item, amount)?;

    if !ctx.mode.is_human() {
        let data = serde_json::json!({
            "item": title_case(item),
            "updated": updated,
        });
        emit_success(out, "update", data)?;
    }
    Ok(())
}

pub fn run_remove<W: Write>(ctx: &CommandContext, out: &mut W, item: &str) -> anyhow::Result<()> {
    let removed = ctx.inventory.remove(item)?;

    if !ctx.mode.is_human() {
        let data = serde_json::json!({
            "item": title_case(item),
            "removed": removed,
        });
        emit_success(out, "remove", data)?;
    }
    Ok(())
}

pub fn run_entries<W: Write>(ctx: &CommandContext, out: &mut W) -> anyhow::Result<()> {
    let count = ctx.inventory.count()?;

    if ctx.mode.is_human() {
        output::render_entries(out, count)?;
    } else {
        emit_success(out, "entries", serde_json::json!({ "entries": count }))?;
    }
    Ok(())
}

pub fn run_decrease<W: Write>(ctx: &CommandContext, out: &mut W, item: &str) -> anyhow::Result<()> {
    let record = ctx.inventory.decrease(item)?;

    if !ctx.mode.is_human() {
        emit_success(out, "decrease", &record)?;
    }
    Ok(())
}

pub fn run_namespace<W: Write>(ctx: &CommandContext, out: &mut W, namespace: &str) -> anyhow::Result<()> {
    let result = ctx.inventory.query_by_namespace(namespace)?;

    if ctx.mode.is_human() {
        output::render_namespace(out, &result)?;
    } else {
        emit_success(out, "namespace", &result)?;
    }
    Ok(())
}
