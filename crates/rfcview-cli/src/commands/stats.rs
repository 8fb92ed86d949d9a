//! Index statistics

use serde::Serialize;

use crate::output::{to_json, OutputFormat};
use crate::{AppContext, Cli};
use rfcview_core::{Directory, RelationKind};

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub records: usize,
    pub updates: usize,
    pub updated_by: usize,
    pub obsoletes: usize,
    pub obsoleted_by: usize,
    pub undated: usize,
    pub earliest_year: Option<u32>,
    pub latest_year: Option<u32>,
}

impl IndexStats {
    pub fn collect(directory: &Directory) -> Self {
        let mut stats = IndexStats {
            records: directory.len(),
            ..Default::default()
        };

        for record in directory.iter() {
            stats.updates += record.updates.len();
            stats.updated_by += record.updated_by.len();
            stats.obsoletes += record.obsoletes.len();
            stats.obsoleted_by += record.obsoleted_by.len();

            match record.year() {
                Some(year) => {
                    stats.earliest_year = Some(stats.earliest_year.map_or(year, |y| y.min(year)));
                    stats.latest_year = Some(stats.latest_year.map_or(year, |y| y.max(year)));
                }
                None => stats.undated += 1,
            }
        }
        stats
    }

    fn count(&self, kind: RelationKind) -> usize {
        match kind {
            RelationKind::Updates => self.updates,
            RelationKind::UpdatedBy => self.updated_by,
            RelationKind::Obsoletes => self.obsoletes,
            RelationKind::ObsoletedBy => self.obsoleted_by,
        }
    }
}

pub fn run(cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let format = OutputFormat::resolve_tabular(cli.format.as_deref())?;
    let stats = IndexStats::collect(&ctx.directory);

    if format == OutputFormat::Json {
        println!("{}", to_json(&stats)?);
        return Ok(());
    }

    println!("Index Statistics");
    println!("================");
    println!("Records: {}", stats.records);
    for kind in RelationKind::ALL {
        println!("{}: {}", kind, stats.count(kind));
    }
    if let (Some(earliest), Some(latest)) = (stats.earliest_year, stats.latest_year) {
        println!("Years: {}-{}", earliest, latest);
    }
    if stats.undated > 0 {
        println!("Undated: {}", stats.undated);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfcview_core::Record;

    #[test]
    fn test_collect() {
        let directory: Directory = vec![
            Record::new(2616, "HTTP/1.1", 199906)
                .with_relation(RelationKind::ObsoletedBy, vec![7230, 7231]),
            Record::new(7230, "HTTP/1.1 Message Syntax", 201406)
                .with_relation(RelationKind::Obsoletes, vec![2616]),
            Record::new(9999, "Undated", 0),
        ]
        .into_iter()
        .collect();

        let stats = IndexStats::collect(&directory);
        assert_eq!(stats.records, 3);
        assert_eq!(stats.obsoletes, 1);
        assert_eq!(stats.obsoleted_by, 2);
        assert_eq!(stats.updates, 0);
        assert_eq!(stats.undated, 1);
        assert_eq!(stats.earliest_year, Some(1999));
        assert_eq!(stats.latest_year, Some(2014));
    }

    #[test]
    fn test_collect_empty() {
        let stats = IndexStats::collect(&Directory::new());
        assert_eq!(stats, IndexStats::default());
    }
}
