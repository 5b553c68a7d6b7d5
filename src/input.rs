//! Line-oriented model-file parser
//!
//! The format is block-structured: a `POINTS`, `ELEMENTS`, `BOUNDS`, or
//! `LOADING` header starts a block, a blank line ends it, and every other
//! line inside a block is a whitespace-separated record. Lines outside any
//! block are ignored. Records are collected into a parser-scoped builder and
//! converted into a validated [`Structure`] in one step.

use std::fs;
use std::path::Path;

use log::debug;

use crate::elements::Direction;
use crate::error::{FrameError, FrameResult};
use crate::loads::MemberLoad;
use crate::model::Structure;

#[derive(Debug, Clone, Copy)]
enum Block {
    Points,
    Elements,
    Bounds,
    Loading,
}

/// Raw whitespace-split records per block, accumulated while scanning
#[derive(Debug, Default)]
struct RawInput {
    points: Vec<Vec<String>>,
    elements: Vec<Vec<String>>,
    bounds: Vec<Vec<String>>,
    loads: Vec<Vec<String>>,
}

/// Parse a model file into a [`Structure`]
pub fn parse_file(path: impl AsRef<Path>) -> FrameResult<Structure> {
    let raw = fs::read_to_string(path)?;
    parse_str(&raw)
}

/// Parse model text into a [`Structure`]
pub fn parse_str(raw: &str) -> FrameResult<Structure> {
    let mut input = RawInput::default();
    let mut block = None;

    for line in raw.lines() {
        match line.trim() {
            "POINTS" => {
                block = Some(Block::Points);
                continue;
            }
            "ELEMENTS" => {
                block = Some(Block::Elements);
                continue;
            }
            "BOUNDS" => {
                block = Some(Block::Bounds);
                continue;
            }
            "LOADING" => {
                block = Some(Block::Loading);
                continue;
            }
            "" => {
                block = None;
                continue;
            }
            _ => {}
        }

        let record: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        match block {
            Some(Block::Points) => input.points.push(record),
            Some(Block::Elements) => input.elements.push(record),
            Some(Block::Bounds) => input.bounds.push(record),
            Some(Block::Loading) => input.loads.push(record),
            None => {}
        }
    }

    input.into_structure()
}

impl RawInput {
    fn into_structure(self) -> FrameResult<Structure> {
        let mut structure = Structure::new();

        for record in &self.points {
            let x = float_field(record, 0, "POINTS")?;
            let y = float_field(record, 1, "POINTS")?;
            structure.add_node(x, y);
        }

        for record in &self.elements {
            let i_node = index_field(record, 0, "ELEMENTS")?;
            let j_node = index_field(record, 1, "ELEMENTS")?;
            let e = float_field(record, 2, "ELEMENTS")?;
            let i = float_field(record, 3, "ELEMENTS")?;
            let a = float_field(record, 4, "ELEMENTS")?;
            structure.add_element(i_node, j_node, e, i, a)?;
        }

        for record in &self.bounds {
            let node = index_field(record, 0, "BOUNDS")?;
            let direction: Direction = field(record, 1, "BOUNDS")?.parse()?;
            let value = float_field(record, 2, "BOUNDS")?;
            structure.add_bound(node, direction, value)?;
        }

        for record in &self.loads {
            match field(record, 0, "LOADING")? {
                "ELEMENT" => {
                    let element = index_field(record, 1, "LOADING")?;
                    let load = match field(record, 2, "LOADING")? {
                        "DISTRIBUTED" => MemberLoad::Distributed {
                            w1: float_field(record, 3, "LOADING")?,
                            w2: float_field(record, 4, "LOADING")?,
                        },
                        "POINT" => MemberLoad::Point {
                            p: float_field(record, 3, "LOADING")?,
                            a: float_field(record, 4, "LOADING")?,
                        },
                        other => return Err(FrameError::UnknownLoadShape(other.to_string())),
                    };
                    structure.add_member_load(element, load)?;
                }
                "POINT" => {
                    let node = index_field(record, 1, "LOADING")?;
                    let direction: Direction = field(record, 2, "LOADING")?.parse()?;
                    let value = float_field(record, 3, "LOADING")?;
                    structure.add_nodal_load(node, direction, value)?;
                }
                other => return Err(FrameError::UnknownLoadRecord(other.to_string())),
            }
        }

        debug!(
            "parsed {} points, {} elements, {} bounds, {} load records",
            self.points.len(),
            self.elements.len(),
            self.bounds.len(),
            self.loads.len()
        );

        Ok(structure)
    }
}

fn field<'a>(record: &'a [String], index: usize, block: &str) -> FrameResult<&'a str> {
    record
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| FrameError::InvalidInput(format!("{block} record is missing field {index}")))
}

fn float_field(record: &[String], index: usize, block: &str) -> FrameResult<f64> {
    let token = field(record, index, block)?;
    token
        .parse()
        .map_err(|_| FrameError::InvalidInput(format!("{block} record has a bad number '{token}'")))
}

fn index_field(record: &[String], index: usize, block: &str) -> FrameResult<usize> {
    let token = field(record, index, block)?;
    token
        .parse()
        .map_err(|_| FrameError::InvalidInput(format!("{block} record has a bad index '{token}'")))
}
