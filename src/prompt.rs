// Operator prompt: two free-text champion names resolved against the store
// catalog. Reading is generic over BufRead so the flow tests without a
// terminal; the binary feeds it stdin from a blocking task.

use std::io::BufRead;

use crate::champ_select::types::TargetSelection;
use crate::config::NoMatchPolicy;
use crate::store::{find_entry, CatalogEntry};

pub const PROMPT_BAN: &str = "Input champion name (to ban)";
pub const PROMPT_PICK: &str = "Input champion name (to select)";
pub const NOT_FOUND: &str = "Champion not found, input correct name";

/// Print the selectable names so the operator knows what resolves.
pub fn print_catalog(catalog: &[CatalogEntry]) {
  for entry in catalog {
    println!("{}", entry.name);
  }
}

fn ask_one<'a, R: BufRead>(
  reader: &mut R,
  catalog: &'a [CatalogEntry],
  prompt: &str,
  policy: NoMatchPolicy,
  attempts: u32,
) -> Result<&'a CatalogEntry, String> {
  let mut remaining = attempts.max(1);
  loop {
    println!("{}", prompt);
    let mut line = String::new();
    let read = reader
      .read_line(&mut line)
      .map_err(|e| format!("Failed to read input: {}", e))?;
    if read == 0 {
      return Err("Input closed before a champion was chosen".to_string());
    }
    let query = line.trim();
    if let Some(entry) = find_entry(catalog, query) {
      return Ok(entry);
    }
    match policy {
      NoMatchPolicy::Abort => {
        return Err(format!("No champion matches \"{}\"", query));
      }
      NoMatchPolicy::Reprompt => {
        println!("{}", NOT_FOUND);
        remaining -= 1;
        if remaining == 0 {
          return Err("No matching champion after repeated attempts".to_string());
        }
      }
    }
  }
}

/// Ask for the ban target, then the pick target.
pub fn ask_targets<R: BufRead>(
  reader: &mut R,
  catalog: &[CatalogEntry],
  policy: NoMatchPolicy,
  attempts: u32,
) -> Result<TargetSelection, String> {
  let ban = ask_one(reader, catalog, PROMPT_BAN, policy, attempts)?.clone();
  let pick = ask_one(reader, catalog, PROMPT_PICK, policy, attempts)?.clone();
  Ok(TargetSelection { ban, pick })
}

/// Run the full prompt flow against stdin.
pub fn ask_targets_from_stdin(
  catalog: &[CatalogEntry],
  policy: NoMatchPolicy,
  attempts: u32,
) -> Result<TargetSelection, String> {
  let stdin = std::io::stdin();
  let mut reader = stdin.lock();
  ask_targets(&mut reader, catalog, policy, attempts)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  fn entry(id: i64, name: &str) -> CatalogEntry {
    CatalogEntry {
      item_id: id,
      name: name.to_string(),
    }
  }

  fn catalog() -> Vec<CatalogEntry> {
    vec![entry(1, "Ahri"), entry(2, "Garen")]
  }

  #[test]
  fn resolves_both_targets() {
    let mut input = Cursor::new("gar\nahr\n");
    let chosen = ask_targets(&mut input, &catalog(), NoMatchPolicy::Reprompt, 5).unwrap();
    assert_eq!(chosen.ban.item_id, 2);
    assert_eq!(chosen.pick.item_id, 1);
  }

  #[test]
  fn reprompts_until_a_match() {
    let mut input = Cursor::new("zzz\n\ngar\nahr\n");
    let chosen = ask_targets(&mut input, &catalog(), NoMatchPolicy::Reprompt, 5).unwrap();
    assert_eq!(chosen.ban.name, "Garen");
  }

  #[test]
  fn abort_policy_fails_on_first_miss() {
    let mut input = Cursor::new("zzz\ngar\nahr\n");
    let result = ask_targets(&mut input, &catalog(), NoMatchPolicy::Abort, 5);
    assert!(result.is_err());
  }

  #[test]
  fn attempt_bound_is_honored() {
    let mut input = Cursor::new("zzz\nyyy\ngar\nahr\n");
    let result = ask_targets(&mut input, &catalog(), NoMatchPolicy::Reprompt, 2);
    assert!(result.is_err());
  }

  #[test]
  fn closed_input_aborts() {
    let mut input = Cursor::new("");
    let result = ask_targets(&mut input, &catalog(), NoMatchPolicy::Reprompt, 5);
    assert!(result.is_err());
  }

  #[test]
  fn queries_are_case_insensitive() {
    let mut input = Cursor::new("GAREN\nAHR\n");
    let chosen = ask_targets(&mut input, &catalog(), NoMatchPolicy::Reprompt, 5).unwrap();
    assert_eq!(chosen.ban.item_id, 2);
    assert_eq!(chosen.pick.item_id, 1);
  }
}
