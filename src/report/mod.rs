//! Builds demonstration trees of generated students and records how their shapes compare.

mod config;
mod error;

pub use self::config::ReportConfig;
pub use self::error::{Error, Result};

use crate::generator::TreeGenerator;
use crate::search_tree::{Avl, Balance, BinaryTree, SearchTree, Unbalanced};
use crate::student::{by_id, by_name, Student};
use rand::Rng;
use std::fmt;
use std::thread;

const BASE_STACK_SIZE: usize = 8 * 1024 * 1024;

// Insertion, `height` and `count` each recurse once per level of a degenerate tree.
const STACK_SIZE_PER_LEVEL: usize = 2 * 1024;

/// The balance policy a report line was measured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Binary,
    Avl,
}

/// The insertion order a report line was built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Degenerate,
    PerfectlyBalanced,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLine {
    pub variant: Variant,
    pub shape: Shape,
    pub size: u32,
    pub count: usize,
    pub height: i32,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let variant = match self.variant {
            Variant::Binary => "binary",
            Variant::Avl => "avl",
        };
        let shape = match self.shape {
            Shape::Degenerate => "degenerate",
            Shape::PerfectlyBalanced => "perfectly balanced",
        };
        write!(
            f,
            "{} tree from {} insertion of {}: nodes {} height {}",
            variant, shape, self.size, self.count, self.height,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<ReportLine>,
    /// Result of searching the probe tree for `ReportConfig::probe_id` by id.
    pub found_by_id: Option<Student>,
    /// Result of searching the probe tree for `ReportConfig::probe_name` by name.
    pub found_by_name: Option<Student>,
}

/// Builds a degenerate and a perfectly balanced tree of every configured size with both variants,
/// then searches a perfectly balanced tree of 100 students for the configured probes.
///
/// The trees are built on a worker thread whose stack is sized for the largest configured tree,
/// since a degenerate tree of `n` students is `n` levels deep.
pub fn run(config: &ReportConfig) -> Result<Report> {
    config.validate()?;
    let depth = config.sizes.iter().cloned().max().unwrap_or(0);
    let config = config.clone();
    on_worker(depth, move || build(&config))
}

/// Returns the stack size of a worker that walks trees up to `depth` levels deep.
pub fn stack_size_for(depth: u32) -> usize {
    BASE_STACK_SIZE.saturating_add((depth as usize).saturating_mul(STACK_SIZE_PER_LEVEL))
}

/// Runs `f` on a thread with enough stack to walk trees up to `depth` levels deep.
pub fn on_worker<F, T>(depth: u32, f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let handle = thread::Builder::new()
        .name(String::from("report"))
        .stack_size(stack_size_for(depth))
        .spawn(f)?;
    handle.join().map_err(|_| Error::WorkerPanicked)
}

fn build(config: &ReportConfig) -> Report {
    let mut generator = TreeGenerator::new(config.rng());
    let mut lines = Vec::new();

    for &size in &config.sizes {
        for &shape in &[Shape::Degenerate, Shape::PerfectlyBalanced] {
            lines.push(measure::<_, Unbalanced>(&mut generator, Variant::Binary, shape, size));
            lines.push(measure::<_, Avl>(&mut generator, Variant::Avl, shape, size));
        }
    }

    let mut probe_tree = BinaryTree::new(by_id);
    generator.perfectly_balanced(1, 100, &mut probe_tree);
    let found_by_id = probe_tree.get(&Student::with_id(config.probe_id)).cloned();
    let found_by_name = probe_tree
        .get_by(&Student::with_name(config.probe_name.as_str()), by_name)
        .cloned();
    debug!("probe by id found {:?}, probe by name found {:?}", found_by_id, found_by_name);

    Report {
        lines,
        found_by_id,
        found_by_name,
    }
}

fn measure<R, B>(
    generator: &mut TreeGenerator<R>,
    variant: Variant,
    shape: Shape,
    size: u32,
) -> ReportLine
where
    R: Rng,
    B: Balance + Default,
{
    let mut tree: SearchTree<Student, B> = SearchTree::new(by_id);
    match shape {
        Shape::Degenerate => generator.degenerate(size, &mut tree),
        Shape::PerfectlyBalanced => generator.perfectly_balanced(1, size, &mut tree),
    }

    let line = ReportLine {
        variant,
        shape,
        size,
        count: tree.count(),
        height: tree.height(),
    };
    info!("{}", line);
    line
}
