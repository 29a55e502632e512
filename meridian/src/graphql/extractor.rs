use lazy_static::lazy_static;
use meridian_types::geo::GeoPoint2d;
use meridian_types::{MultiPolygon, Polygon, Ring};
use regex::Regex;

use crate::error::MeridianError;
use crate::wkt::{self, number, point};

const MAX_DEPTH: usize = 8;

lazy_static! {
    static ref COORDINATES_BLOCK: Regex =
        Regex::new(r"coordinates\s*:\s*(\[)\s*\[").expect("valid regex");
}

/// Extracts the area polygon from a GraphQL document and returns it as WKT.
///
/// Only the first ring of the first `coordinates: [[...]]` block is read, so for a `multiPolygon` filter the result
/// is its first polygon. An open ring is closed by repeating its first point.
pub fn extract(document: &str) -> Result<String, MeridianError> {
    Ok(wkt::serialize(&extract_polygon(document)?))
}

/// Same as [`extract`], but returns the geometry instead of its WKT.
pub fn extract_polygon(document: &str) -> Result<MultiPolygon, MeridianError> {
    let start = COORDINATES_BLOCK
        .captures(document)
        .and_then(|c| c.get(1))
        .ok_or(MeridianError::CoordinatesNotFound)?
        .start();

    let mut scanner = Scanner::new(&document[start..]);
    let block = scanner.block()?;
    let ring = first_ring(&block);

    let points = ring
        .iter()
        .map(|node| match node {
            Node::List(pair) => parse_pair(pair),
            Node::Number(n) => Err(MeridianError::MalformedCoordinate(format!(
                "expected `[lon, lat]`, got {n:?}"
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let extracted = points.len();
    let ring = Ring::new(points)?;
    if ring.point_count() != extracted {
        log::debug!("Closed open ring extracted from GraphQL document");
    }

    Ok(Polygon::new(ring).into())
}

/// Descends into the first element of nested lists until reaching a list of coordinate pairs.
fn first_ring<'a, 'n>(mut list: &'n [Node<'a>]) -> &'n [Node<'a>] {
    while let Some(Node::List(inner)) = list.first() {
        if matches!(inner.first(), Some(Node::Number(_))) {
            break;
        }
        list = inner;
    }

    list
}

fn parse_pair(pair: &[Node<'_>]) -> Result<GeoPoint2d, MeridianError> {
    match pair {
        [Node::Number(lon), Node::Number(lat)] => point(number(lon)?, number(lat)?),
        _ => Err(MeridianError::MalformedCoordinate(format!(
            "expected `[lon, lat]`, got a list of {} element(s)",
            pair.len()
        ))),
    }
}

#[derive(Debug, PartialEq)]
enum Node<'a> {
    Number(&'a str),
    List(Vec<Node<'a>>),
}

/// Bracket scanner over the text starting at the opening `[` of a coordinates block.
struct Scanner<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    fn block(&mut self) -> Result<Vec<Node<'a>>, MeridianError> {
        match self.next_token() {
            Some("[") => self.list(1),
            _ => Err(MeridianError::CoordinatesNotFound),
        }
    }

    /// Reads comma separated list items after the opening bracket, up to and including the
    /// closing one.
    fn list(&mut self, depth: usize) -> Result<Vec<Node<'a>>, MeridianError> {
        if depth > MAX_DEPTH {
            return Err(MeridianError::MalformedCoordinate(
                "coordinates are nested too deep".to_string(),
            ));
        }

        let mut items = vec![];
        loop {
            let item = match self.next_token() {
                Some("]") if items.is_empty() => return Ok(items),
                Some("[") => Node::List(self.list(depth + 1)?),
                Some(token @ ("," | "]")) => return Err(unexpected(token)),
                Some(word) => Node::Number(word),
                None => return Err(MeridianError::CoordinatesNotFound),
            };
            items.push(item);

            match self.next_token() {
                Some(",") => {}
                Some("]") => return Ok(items),
                Some(other) => return Err(unexpected(other)),
                // The block is never closed.
                None => return Err(MeridianError::CoordinatesNotFound),
            }
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let rest = &self.text[self.offset..];
        let trimmed = rest.trim_start();
        self.offset += rest.len() - trimmed.len();

        let c = trimmed.chars().next()?;
        let len = match c {
            '[' | ']' | ',' => 1,
            _ => trimmed
                .find(|c: char| c.is_whitespace() || matches!(c, '[' | ']' | ','))
                .unwrap_or(trimmed.len()),
        };

        self.offset += len;
        Some(&trimmed[..len])
    }
}

fn unexpected(token: &str) -> MeridianError {
    MeridianError::MalformedCoordinate(format!(
        "unexpected {token:?}, coordinates must be comma separated"
    ))
}
