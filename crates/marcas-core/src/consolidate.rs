//! Grouping of normalized records into one row per worker.

use std::cmp::Ordering;
use std::collections::HashMap;

use marcas_map::normalize_text;
use marcas_model::{NormalizedRecord, WorkerRow};

/// Merge all records into one consolidated row per group key.
///
/// Name-derived keys are first linked to identifier-derived keys (see
/// [`link_name_keys`]), then groups keep first-seen order while merging. For every field the first
/// non-blank value in group order wins; later values are ignored even when
/// they contradict it (inherited behavior, deliberately not conflict-flagged).
/// `marcas` counts the records in the group.
///
/// Final ordering: when any row carries an identifier, rows sort by
/// (identifier, name); otherwise by name alone. Missing keys sort last and
/// the sort is stable, so equal-keyed rows keep their first-seen order.
#[must_use]
pub fn consolidate(records: Vec<NormalizedRecord>) -> Vec<WorkerRow> {
    let records = link_name_keys(records);

    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<WorkerRow> = Vec::new();

    for record in records {
        let slot = match slots.get(&record.group_key) {
            Some(&slot) => slot,
            None => {
                slots.insert(record.group_key.clone(), rows.len());
                rows.push(WorkerRow::default());
                rows.len() - 1
            }
        };
        merge_record(&mut rows[slot], record);
    }

    let any_rut = rows.iter().any(|row| row.rut.is_some());
    rows.sort_by(|a, b| {
        if any_rut {
            cmp_missing_last(a.rut.as_deref(), b.rut.as_deref())
                .then_with(|| cmp_missing_last(a.nombre.as_deref(), b.nombre.as_deref()))
        } else {
            cmp_missing_last(a.nombre.as_deref(), b.nombre.as_deref())
        }
    });
    rows
}

/// Unify name-derived keys with identifier-derived keys.
///
/// Sources differ in which identifying fields they carry: one sheet may know
/// a worker by identifier, another only by name. A record carrying both
/// associates the normalized name with the identifier's digit body, and
/// name-only records with a known association join that worker's group.
/// First association wins when the same name maps to several identifiers.
fn link_name_keys(mut records: Vec<NormalizedRecord>) -> Vec<NormalizedRecord> {
    let mut aliases: HashMap<String, String> = HashMap::new();
    for record in &records {
        if record.rut.is_some()
            && let Some(nombre) = record.nombre.as_deref()
        {
            let name_key = normalize_text(nombre);
            if !name_key.is_empty() {
                aliases
                    .entry(name_key)
                    .or_insert_with(|| record.group_key.clone());
            }
        }
    }
    if aliases.is_empty() {
        return records;
    }
    for record in &mut records {
        // Name-only records carry the normalized name as their key.
        if record.rut.is_none()
            && let Some(body) = aliases.get(&record.group_key)
        {
            record.group_key = body.clone();
        }
    }
    records
}

fn merge_record(row: &mut WorkerRow, record: NormalizedRecord) {
    fill_first(&mut row.rut, record.rut);
    fill_first(&mut row.nombre, record.nombre);
    fill_first(&mut row.especialidad, record.especialidad);
    fill_first(&mut row.contrato, record.contrato);
    fill_first(&mut row.supervisor, record.supervisor);
    fill_first(&mut row.rut_empleador, record.rut_empleador);
    row.marcas += 1;
}

fn fill_first(target: &mut Option<String>, value: Option<String>) {
    if target.is_none() {
        *target = value;
    }
}

/// Ascending comparison with missing values ordered after present ones.
fn cmp_missing_last(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_sort_last() {
        assert_eq!(cmp_missing_last(Some("a"), None), Ordering::Less);
        assert_eq!(cmp_missing_last(None, Some("a")), Ordering::Greater);
        assert_eq!(cmp_missing_last(None, None), Ordering::Equal);
    }
}
