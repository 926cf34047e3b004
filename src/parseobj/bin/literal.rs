//-- writing a Document as C++ array literals

use crate::obj::{Document, Face, Vertex};

pub const DEFAULT_NAMESPACE: &str = "voltage";

/// `{x, y, z}` with each value in shortest round-trip form.
///
/// `{:?}` always keeps a fractional part or an exponent (`0.0`, `1e-7`),
/// so every value reads back as a floating literal on the C++ side.
pub fn vertex_literal(v: &Vertex) -> String {
    let vals: Vec<String> = v.coords.iter().map(|x| format!("{:?}", x)).collect();
    format!("{{{}}}", vals.join(", "))
}

pub fn face_literal(f: &Face) -> String {
    let vals: Vec<String> = f.indices.iter().map(|i| i.to_string()).collect();
    format!("{{{}}}", vals.join(", "))
}

pub struct Template<'a> {
    pub variable: &'a str,
    pub namespace: &'a str,
}

impl<'a> Template<'a> {
    pub fn new(variable: &'a str) -> Template<'a> {
        Template {
            variable,
            namespace: DEFAULT_NAMESPACE,
        }
    }

    pub fn render(&self, doc: &Document) -> String {
        let vs: Vec<String> = doc.vertices.iter().map(vertex_literal).collect();
        let fs: Vec<String> = doc.faces.iter().map(face_literal).collect();
        let name = self.variable;
        let ns = self.namespace;
        let out = format!(
            "
Vector3 {name}Vertices[] = {{
    {vs}
}};
{ns}::FaceDefinition {name}Faces[] = {{
    {fs}
}};
{ns}::Mesh* {name} = new {ns}::Mesh({name}Vertices, {nv}, {name}Faces, {nf});
",
            name = name,
            ns = ns,
            vs = vs.join(", "),
            fs = fs.join(", "),
            nv = doc.vertex_count(),
            nf = doc.face_count(),
        );
        out.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(coords: &[f64]) -> Vertex {
        Vertex {
            coords: coords.to_vec(),
        }
    }

    fn f(indices: &[i64]) -> Face {
        Face {
            indices: indices.to_vec(),
        }
    }

    #[test]
    fn vertex_literal_keeps_decimal_point() {
        assert_eq!(vertex_literal(&v(&[1.0, 2.0, 3.0])), "{1.0, 2.0, 3.0}");
        assert_eq!(vertex_literal(&v(&[0.0, -0.5, 0.1])), "{0.0, -0.5, 0.1}");
        assert_eq!(vertex_literal(&v(&[1e-7, 1e16])), "{1e-7, 1e16}");
    }

    #[test]
    fn face_literal_is_plain_integers() {
        assert_eq!(face_literal(&f(&[0, 1, 2])), "{0, 1, 2}");
        assert_eq!(face_literal(&f(&[3, 2, 1, 0])), "{3, 2, 1, 0}");
    }

    #[test]
    fn render_single_triangle() {
        let doc = Document {
            vertices: vec![v(&[0.0, 0.0, 0.0])],
            faces: vec![f(&[0, 0, 0])],
        };
        let expected = "Vector3 meshVertices[] = {
    {0.0, 0.0, 0.0}
};
voltage::FaceDefinition meshFaces[] = {
    {0, 0, 0}
};
voltage::Mesh* mesh = new voltage::Mesh(meshVertices, 1, meshFaces, 1);";
        assert_eq!(Template::new("mesh").render(&doc), expected);
    }

    #[test]
    fn render_joins_and_counts() {
        let doc = Document {
            vertices: vec![v(&[0.0, 0.0, 0.0]), v(&[1.0, 0.0, 0.0]), v(&[0.0, 1.0, 0.0])],
            faces: vec![f(&[0, 1, 2]), f(&[2, 1, 0])],
        };
        let t = Template {
            variable: "tri",
            namespace: "engine",
        };
        let out = t.render(&doc);
        assert!(out.contains("    {0.0, 0.0, 0.0}, {1.0, 0.0, 0.0}, {0.0, 1.0, 0.0}\n"));
        assert!(out.contains("engine::FaceDefinition triFaces[] = {\n    {0, 1, 2}, {2, 1, 0}\n};"));
        assert!(out.ends_with("engine::Mesh* tri = new engine::Mesh(triVertices, 3, triFaces, 2);"));
    }

    #[test]
    fn render_empty_document() {
        let out = Template::new("empty").render(&Document::default());
        assert!(out.starts_with("Vector3 emptyVertices[] = {\n    \n};"));
        assert!(out.ends_with("(emptyVertices, 0, emptyFaces, 0);"));
    }
}
