//-- reading the `v` and `f` records of an OBJ file

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObjError {
    #[error("unable to open {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("unable to read line: {0}")]
    Io(#[from] io::Error),
    #[error("unable to write output: {0}")]
    Write(io::Error),
    #[error("line {line}: {field:?} is not a floating-point number")]
    Float { line: usize, field: String },
    #[error("line {line}: {field:?} has no literal form (NaN or infinity)")]
    NonFinite { line: usize, field: String },
    #[error("line {line}: {field:?} is not a vertex index")]
    Index { line: usize, field: String },
}

/// One `v` record, with as many coordinates as the line had.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub coords: Vec<f64>,
}

/// One `f` record; indices are 0-based and never checked against the vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<i64>,
}

#[derive(Debug, Default)]
pub struct Document {
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
}

impl Document {
    pub fn from_path(path: &Path) -> Result<Document, ObjError> {
        let f = File::open(path).map_err(|source| ObjError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Document::from_reader(BufReader::new(f))
    }

    /// Single pass over the lines; the first malformed field aborts.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Document, ObjError> {
        let mut doc = Document::default();
        for (i, l) in reader.lines().enumerate() {
            let l = l?;
            let lineno = i + 1;
            if l.starts_with("v ") {
                doc.vertices.push(parse_vertex(&l, lineno)?);
            } else if l.starts_with("f ") {
                doc.faces.push(parse_face(&l, lineno)?);
            } else if let Some(tag) = l.split_whitespace().next() {
                debug!("line {}: ignoring '{}' record", lineno, tag);
            }
        }
        Ok(doc)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

pub fn parse_vertex(l: &str, lineno: usize) -> Result<Vertex, ObjError> {
    let coords = l
        .split(' ')
        .skip(1)
        .map(|s| -> Result<f64, ObjError> {
            let x: f64 = s.trim().parse().map_err(|_| ObjError::Float {
                line: lineno,
                field: s.to_string(),
            })?;
            if !x.is_finite() {
                return Err(ObjError::NonFinite {
                    line: lineno,
                    field: s.to_string(),
                });
            }
            Ok(x)
        })
        .collect::<Result<Vec<f64>, ObjError>>()?;
    Ok(Vertex { coords })
}

//-- "7/3/1" -> 6, the texture and normal sub-fields are dropped
pub fn parse_face(l: &str, lineno: usize) -> Result<Face, ObjError> {
    let indices = l
        .split(' ')
        .skip(1)
        .map(|s| {
            let vi = s.split('/').next().unwrap_or(s);
            vi.trim()
                .parse::<i64>()
                .ok()
                .and_then(|i| i.checked_sub(1))
                .ok_or_else(|| ObjError::Index {
                    line: lineno,
                    field: s.to_string(),
                })
        })
        .collect::<Result<Vec<i64>, ObjError>>()?;
    Ok(Face { indices })
}
