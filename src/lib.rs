//! Binary search trees ordered by a caller-supplied comparator, in an unbalanced and a
//! self-balancing (AVL) variant, along with the student records, tree generator and report used to
//! compare the shapes the two variants produce.

extern crate rand;
extern crate serde;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod generator;
pub mod report;
pub mod search_tree;
pub mod student;
