use fovea_types::{Column, ColumnData, Dtype, EventKind, FoveaError, InterpClass, TimeSeriesTable};

use crate::recording::Recording;

const TYPE_COLUMN: &str = "type";
const END_TS_COLUMN: &str = "end_timestamp";
const DURATION_COLUMN: &str = "duration";

/// Concatenate several event tables into one ordered table.
///
/// The output's primary timestamp axis carries each event's start
/// timestamp. Its columns are the `type` discriminator (`blink` /
/// `fixation` / `saccade` / `event`), `end_timestamp`, `duration`
/// (milliseconds), and the union of all kind-specific columns; where a kind
/// lacks a column its rows are filled with that column's typed missing
/// marker. Rows are sorted ascending by start timestamp with a fresh
/// contiguous row index; ties keep the canonical selection order.
///
/// The free-text annotation kind is schema-normalized before the merge: its
/// primary timestamp column becomes the start timestamp, and its `name` /
/// `type` columns are renamed `message_name` / `message_type` so they do
/// not collide with the discriminator.
///
/// `event_names` follows the selection rules of [`EventKind::resolve`]:
/// `["all"]` expands to the full supported set, singular/plural forms are
/// both accepted case-insensitively, and duplicates collapse.
///
/// # Errors
/// - `FoveaError::InvalidInput` for unknown names, fewer than two distinct
///   kinds, or a column whose dtype conflicts across kinds.
/// - `FoveaError::StreamUnavailable` when a selected kind is not present on
///   the recording.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(rec), level = "debug"))]
pub fn concat_events<R>(rec: &R, event_names: &[&str]) -> Result<TimeSeriesTable, FoveaError>
where
    R: Recording + ?Sized,
{
    let kinds = EventKind::resolve(event_names)?;
    if kinds.len() < 2 {
        return Err(FoveaError::invalid_input(
            "at least two distinct event kinds are required to concatenate",
        ));
    }

    let mut tables: Vec<(EventKind, TimeSeriesTable)> = Vec::with_capacity(kinds.len());
    for &kind in &kinds {
        let table = rec
            .events(kind)
            .ok_or_else(|| FoveaError::stream_unavailable(kind.as_str()))?;
        let table = if kind == EventKind::Event {
            normalize_annotations(table)?
        } else {
            table.clone()
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = kind.as_str(), rows = table.len(), "selected events");
        tables.push((kind, table));
    }

    // Declared superset schema: discriminator and interval columns first,
    // then kind-specific columns in first-seen order. A source `type`
    // column is superseded by the discriminator.
    let mut schema: Vec<(String, Dtype, InterpClass)> = vec![
        (TYPE_COLUMN.to_string(), Dtype::Str, InterpClass::Discrete),
        (END_TS_COLUMN.to_string(), Dtype::Int, InterpClass::Discrete),
        (DURATION_COLUMN.to_string(), Dtype::Float, InterpClass::Continuous),
    ];
    for (_, table) in &tables {
        for col in table.columns() {
            if let Some(pos) = schema.iter().position(|(n, _, _)| n.as_str() == col.name()) {
                if schema[pos].1 != col.dtype() {
                    return Err(FoveaError::invalid_input(format!(
                        "column `{}` has conflicting dtypes across event kinds",
                        col.name()
                    )));
                }
            } else {
                schema.push((col.name().to_string(), col.dtype(), col.class()));
            }
        }
    }

    // Stable sort by start timestamp; ties keep the per-kind push order.
    let mut order: Vec<(i64, usize, usize)> = Vec::new();
    for (ti, (_, table)) in tables.iter().enumerate() {
        for (ri, &ts) in table.timestamps().iter().enumerate() {
            order.push((ts, ti, ri));
        }
    }
    order.sort_by_key(|&(ts, _, _)| ts);

    let timestamps: Vec<i64> = order.iter().map(|&(ts, _, _)| ts).collect();
    let mut columns = Vec::with_capacity(schema.len());
    for (name, dtype, class) in &schema {
        let data = if name.as_str() == TYPE_COLUMN {
            ColumnData::Str(
                order
                    .iter()
                    .map(|&(_, ti, _)| Some(tables[ti].0.as_str().to_string()))
                    .collect(),
            )
        } else {
            gather(&tables, &order, name, *dtype)
        };
        columns.push(Column::new(name.clone(), *class, data)?);
    }
    TimeSeriesTable::new(timestamps, columns)
}

/// Collect one output column across all source tables, filling rows from
/// kinds that lack the column with the typed missing marker.
fn gather(
    tables: &[(EventKind, TimeSeriesTable)],
    order: &[(i64, usize, usize)],
    name: &str,
    dtype: Dtype,
) -> ColumnData {
    let sources: Vec<Option<&ColumnData>> = tables
        .iter()
        .map(|(_, t)| t.column(name).map(Column::data))
        .collect();
    match dtype {
        Dtype::Float => ColumnData::Float(
            order
                .iter()
                .map(|&(_, ti, ri)| match sources[ti] {
                    Some(ColumnData::Float(v)) => v[ri],
                    _ => f64::NAN,
                })
                .collect(),
        ),
        Dtype::Int => ColumnData::Int(
            order
                .iter()
                .map(|&(_, ti, ri)| match sources[ti] {
                    Some(ColumnData::Int(v)) => v[ri],
                    _ => None,
                })
                .collect(),
        ),
        Dtype::Str => ColumnData::Str(
            order
                .iter()
                .map(|&(_, ti, ri)| match sources[ti] {
                    Some(ColumnData::Str(v)) => v[ri].clone(),
                    _ => None,
                })
                .collect(),
        ),
    }
}

fn normalize_annotations(table: &TimeSeriesTable) -> Result<TimeSeriesTable, FoveaError> {
    let mut out = table.clone();
    if out.column("name").is_some() {
        out.rename_column("name", "message_name")?;
    }
    if out.column("type").is_some() {
        out.rename_column("type", "message_type")?;
    }
    Ok(out)
}
