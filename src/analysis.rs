/*!
Selecting an algorithm by name and collecting its output into a single serializable result.

| Name | Algorithm | Filled fields |
|---|---|---|
| `dfs` | [`TraceTraversal::dfs_trace`] | `log` |
| `bfs` | [`TraceTraversal::bfs_trace`] | `log` |
| `cycle` | [`CycleDetection::detect_cycles`] | `log`, `cycles` |
| `dag` | [`Topological::topological_order`] | `path`, `acyclic` |
| `scc` | [`Connectivity::strongly_connected_components`] | `log` (always empty), `scc` |
| `ap` | [`Cuts::articulation_points_and_bridges`] | `log`, `articulation_points`, `bridges` |
| `ep` | [`Eulerian::eulerian_path`] | `path` |

All nodes in a result are reported by their labels.
*/

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{algo::*, error::Error, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dfs,
    Bfs,
    Cycle,
    Dag,
    Scc,
    Ap,
    Ep,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Cycle,
        Algorithm::Dag,
        Algorithm::Scc,
        Algorithm::Ap,
        Algorithm::Ep,
    ];

    /// Returns the selector name of the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
            Algorithm::Cycle => "cycle",
            Algorithm::Dag => "dag",
            Algorithm::Scc => "scc",
            Algorithm::Ap => "ap",
            Algorithm::Ep => "ep",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == name)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Output of a single analysis; fields the algorithm does not produce stay empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub log: Vec<String>,
    pub path: Vec<String>,
    pub cycles: Vec<Vec<String>>,
    pub acyclic: bool,
    pub scc: Vec<Vec<String>>,
    pub articulation_points: Vec<String>,
    pub bridges: Vec<(String, String)>,
}

/// Runs an [`Algorithm`] and reports its results by node label
pub trait Analyze {
    /// # Examples
    /// ```
    /// use graphtrace::{prelude::*, analysis::*};
    ///
    /// let g = Graph::build(["A", "B", "C"], [["A", "B"], ["B", "C"]], false);
    /// let result = g.analyze("ap".parse().unwrap());
    ///
    /// assert_eq!(result.articulation_points, vec!["B"]);
    /// assert_eq!(result.bridges.len(), 2);
    /// ```
    fn analyze(&self, algorithm: Algorithm) -> AnalysisResult;
}

impl<G> Analyze for G
where
    G: AdjacencyList
        + DegreeCount
        + GraphType
        + GraphEdgeOrder
        + GraphEdgeEditing
        + GraphTranspose
        + Labelled
        + Clone,
{
    fn analyze(&self, algorithm: Algorithm) -> AnalysisResult {
        let _span = tracing::debug_span!("analyze", %algorithm).entered();

        let labels = |nodes: &[Node]| self.labels_of(nodes.iter().copied());
        let mut result = AnalysisResult::default();

        match algorithm {
            Algorithm::Dfs => result.log = self.dfs_trace().tokens(self),
            Algorithm::Bfs => result.log = self.bfs_trace().tokens(self),
            Algorithm::Cycle => {
                let report = self.detect_cycles();
                result.log = report.trace.tokens(self);
                result.cycles = report.cycles.iter().map(|c| labels(c)).collect();
            }
            Algorithm::Dag => {
                let topo = self.topological_order();
                result.path = labels(&topo.order);
                result.acyclic = topo.acyclic;
            }
            Algorithm::Scc => {
                result.scc = self
                    .strongly_connected_components()
                    .iter()
                    .map(|c| labels(c))
                    .collect();
            }
            Algorithm::Ap => {
                let report = self.articulation_points_and_bridges();
                result.log = report.trace.tokens(self);
                result.articulation_points = labels(&report.articulation_points);
                result.bridges = report
                    .bridges
                    .iter()
                    .map(|&Edge(u, v)| (self.label_of(u).to_string(), self.label_of(v).to_string()))
                    .collect();
            }
            Algorithm::Ep => result.path = labels(&self.eulerian_path()),
        }

        debug!(
            log = result.log.len(),
            path = result.path.len(),
            "analysis finished"
        );
        result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn parse_algorithm() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>().unwrap(), algo);
        }
        assert_eq!("SCC".parse::<Algorithm>().unwrap(), Algorithm::Scc);
        assert_eq!(" Ep ".parse::<Algorithm>().unwrap(), Algorithm::Ep);
        assert!(matches!(
            "mst".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm(name)) if name == "mst"
        ));
    }

    #[test]
    fn results_by_label() {
        let g = graph(&["A", "B", "C"], &["A B", "B C", "C A"], true);

        let cycle = g.analyze(Algorithm::Cycle);
        assert_eq!(cycle.cycles, vec![vec!["A", "B", "C", "A"]]);
        assert!(!cycle.log.is_empty());
        assert!(!cycle.acyclic);

        let dag = g.analyze(Algorithm::Dag);
        assert!(dag.path.is_empty());
        assert!(!dag.acyclic);

        let scc = g.analyze(Algorithm::Scc);
        assert!(scc.log.is_empty());
        assert_eq!(scc.scc, vec![vec!["A", "C", "B"]]);

        let ep = g.analyze(Algorithm::Ep);
        assert_eq!(ep.path, vec!["A", "B", "C", "A"]);
    }

    #[test]
    fn bridges_are_pairs() {
        let g = graph(&["A", "B"], &["A B"], false);
        let result = g.analyze(Algorithm::Ap);

        assert_eq!(result.bridges, vec![("A".to_string(), "B".to_string())]);
        assert!(result.articulation_points.is_empty());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["bridges"], serde_json::json!([["A", "B"]]));
        assert_eq!(json["acyclic"], serde_json::json!(false));
        assert_eq!(
            json.as_object().unwrap().keys().cloned().sorted().collect_vec(),
            vec!["acyclic", "articulation_points", "bridges", "cycles", "log", "path", "scc"]
        );
    }

    #[test]
    fn analysis_is_idempotent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(37);

        for directed in [false, true] {
            let g = random_graph(rng, 12, 20, directed);
            for algo in Algorithm::ALL {
                assert_eq!(g.analyze(algo), g.analyze(algo), "{algo}");
            }
        }
    }
}
