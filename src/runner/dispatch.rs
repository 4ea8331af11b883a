//! Operation dispatch
//!
//! Loads the store named by the invocation, runs the requested operation
//! and writes its textual result to the output sink. `add` and `remove`
//! save the store afterwards, even when the mutation itself was refused.

use crate::config::{Invocation, Operation};
use crate::error::{RecmanError, Result, StoreResult};
use crate::runner::Context;
use crate::store::{self, Record, Store};
use std::io::Write;

/// Run one invocation, writing results to `out`
pub fn perform<W: Write>(invocation: Invocation, out: &mut W, ctx: &Context) -> Result<()> {
    let path = invocation.file_name.as_path();
    let mut store = store::load(path, ctx)?;

    ctx.print_info(&format!(
        "running {} on {} ({} record(s))",
        invocation.operation,
        path.display(),
        store.len()
    ));

    match invocation.operation {
        Operation::Add => {
            let record = parse_record(invocation.require_item()?)?;
            mutate(&mut store, out, ctx, |store| store.add(record))?;
        }
        Operation::Remove => {
            let id = invocation.require_id()?;
            mutate(&mut store, out, ctx, |store| store.remove(id))?;
        }
        Operation::List => {
            out.write_all(store.to_json()?.as_bytes())?;
        }
        Operation::FindById => {
            let id = invocation.require_id()?;
            match store.find(id) {
                Some(record) => out.write_all(record.to_json()?.as_bytes())?,
                None => ctx.print_debug(&format!("no record with id {}", id)),
            }
        }
    }

    if !invocation.operation.is_mutation() {
        return Ok(());
    }

    if let Err(e) = store::save(path, &store, ctx) {
        ctx.print_error(&format!("failed to save store: {}", e));
        return Err(e);
    }

    Ok(())
}

/// Decode the `item` argument, refusing records without an id
fn parse_record(item: &str) -> Result<Record> {
    let record = Record::from_json(item)?;
    if record.is_absent() {
        return Err(RecmanError::Decoding(
            "invalid item: record id must not be empty".to_string(),
        ));
    }
    Ok(record)
}

/// Apply a store mutation, reporting a refused change to `out` instead of
/// failing
fn mutate<W, F>(store: &mut Store, out: &mut W, ctx: &Context, op: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut Store) -> StoreResult<()>,
{
    if let Err(e) = op(store) {
        ctx.print_debug(&format!("store unchanged: {}", e));
        out.write_all(e.to_string().as_bytes())?;
    }
    Ok(())
}
