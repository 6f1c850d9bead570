// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Engine XML Rendering
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Text rendering of the four engine input files.
//!
//! Output depends only on the model, never on hash order or the clock, so
//! identical models render byte-identical files.

use std::collections::BTreeMap;
use std::fmt::Write;

use fission_geometry::{BoundaryType, CellId, Fill, Geometry, UniverseId};
use fission_types::material::Material;

use crate::settings::Settings;
use crate::tallies::{Filter, TallySet};

/// Indented XML text writer.
pub struct XmlWriter {
    content: String,
    indent_level: usize,
    root: &'static str,
}

impl XmlWriter {
    pub fn new(root: &'static str) -> Self {
        let mut writer = XmlWriter {
            content: String::with_capacity(16384),
            indent_level: 0,
            root,
        };
        writer.content.push_str("<?xml version='1.0' encoding='utf-8'?>\n");
        writer.open(root, &[]);
        writer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.content.push_str("  ");
        }
    }

    fn write_tag(&mut self, tag: &str, attrs: &[(&str, String)]) {
        let _ = write!(self.content, "<{tag}");
        for (key, value) in attrs {
            let _ = write!(self.content, " {key}=\"{}\"", escape(value));
        }
    }

    pub fn open(&mut self, tag: &str, attrs: &[(&str, String)]) {
        self.write_indent();
        self.write_tag(tag, attrs);
        self.content.push_str(">\n");
        self.indent_level += 1;
    }

    pub fn close(&mut self, tag: &str) {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.write_indent();
        let _ = writeln!(self.content, "</{tag}>");
    }

    /// Self-closing element.
    pub fn empty(&mut self, tag: &str, attrs: &[(&str, String)]) {
        self.write_indent();
        self.write_tag(tag, attrs);
        self.content.push_str("/>\n");
    }

    /// Element with text content on one line.
    pub fn text(&mut self, tag: &str, attrs: &[(&str, String)], text: &str) {
        self.write_indent();
        self.write_tag(tag, attrs);
        let _ = writeln!(self.content, ">{}</{tag}>", escape(text));
    }

    /// Element whose text spans several unindented lines.
    pub fn block(&mut self, tag: &str, lines: &[String]) {
        self.write_indent();
        let _ = writeln!(self.content, "<{tag}>");
        for line in lines {
            self.content.push_str(line);
            self.content.push('\n');
        }
        self.write_indent();
        let _ = writeln!(self.content, "</{tag}>");
    }

    pub fn finish(mut self) -> String {
        let root = self.root;
        self.close(root);
        self.content
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Space-separated list of displayable values.
pub fn join<T: std::fmt::Display>(values: &[T]) -> String {
    let mut out = String::new();
    for (k, v) in values.iter().enumerate() {
        if k > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{v}");
    }
    out
}

pub fn materials_xml(materials: &[Material], cross_sections: Option<&str>) -> String {
    let mut w = XmlWriter::new("materials");
    if let Some(path) = cross_sections {
        w.text("cross_sections", &[], path);
    }
    for m in materials {
        w.open(
            "material",
            &[("id", m.id.to_string()), ("name", m.name.clone())],
        );
        w.empty(
            "density",
            &[
                ("units", m.density_unit.as_str().to_string()),
                ("value", m.density.to_string()),
            ],
        );
        for n in &m.nuclides {
            w.empty(
                "nuclide",
                &[("ao", n.fraction.to_string()), ("name", n.name.clone())],
            );
        }
        for table in &m.sab {
            w.empty("sab", &[("name", table.clone())]);
        }
        w.close("material");
    }
    w.finish()
}

pub fn geometry_xml(geometry: &Geometry) -> String {
    let owners: BTreeMap<CellId, UniverseId> = geometry
        .universes
        .iter()
        .flat_map(|u| u.cells.iter().map(move |&c| (c, u.id)))
        .collect();

    let mut w = XmlWriter::new("geometry");
    for cell in &geometry.cells {
        let mut attrs = Vec::with_capacity(5);
        match cell.fill {
            Fill::Universe(u) => attrs.push(("fill", u.to_string())),
            Fill::Lattice(l) => attrs.push(("fill", l.to_string())),
            Fill::Material(_) | Fill::Void => {}
        }
        attrs.push(("id", cell.id.to_string()));
        match cell.fill {
            Fill::Material(m) => attrs.push(("material", m.to_string())),
            Fill::Void => attrs.push(("material", "void".to_string())),
            Fill::Universe(_) | Fill::Lattice(_) => {}
        }
        if let Some(name) = &cell.name {
            attrs.push(("name", name.clone()));
        }
        if let Some(region) = &cell.region {
            attrs.push(("region", region.to_string()));
        }
        if let Some(u) = owners.get(&cell.id) {
            attrs.push(("universe", u.to_string()));
        }
        w.empty("cell", &attrs);
    }

    for s in &geometry.surfaces {
        let mut attrs = Vec::with_capacity(5);
        if s.boundary != BoundaryType::Transmission {
            attrs.push(("boundary", s.boundary.as_str().to_string()));
        }
        attrs.push(("coeffs", join(&s.kind.coeffs())));
        attrs.push(("id", s.id.to_string()));
        if let Some(name) = &s.name {
            attrs.push(("name", name.clone()));
        }
        attrs.push(("type", s.kind.type_name().to_string()));
        w.empty("surface", &attrs);
    }

    for lattice in &geometry.lattices {
        let mut attrs = vec![("id", lattice.id.to_string())];
        if let Some(name) = &lattice.name {
            attrs.push(("name", name.clone()));
        }
        w.open("lattice", &attrs);
        w.text("pitch", &[], &join(&lattice.pitch));
        if let Some(outer) = lattice.outer {
            w.text("outer", &[], &outer.to_string());
        }
        let (nx, ny) = lattice.dimension();
        w.text("dimension", &[], &join(&[nx, ny]));
        w.text("lower_left", &[], &join(&lattice.lower_left));
        let rows: Vec<String> = lattice
            .universes
            .rows()
            .into_iter()
            .map(|row| join(&row.to_vec()))
            .collect();
        w.block("universes", &rows);
        w.close("lattice");
    }
    w.finish()
}

pub fn settings_xml(settings: &Settings) -> String {
    let mut w = XmlWriter::new("settings");
    w.text("run_mode", &[], settings.run_mode.as_str());
    w.text("particles", &[], &settings.particles.to_string());
    w.text("batches", &[], &settings.batches.to_string());
    w.text("inactive", &[], &settings.inactive.to_string());
    w.open(
        "source",
        &[
            ("particle", "neutron".to_string()),
            ("strength", "1.0".to_string()),
            ("type", "independent".to_string()),
        ],
    );
    let space = settings.source.space;
    w.open("space", &[("type", space.type_name().to_string())]);
    w.text("parameters", &[], &join(&space.parameters()));
    w.close("space");
    if settings.source.fissionable_only {
        w.open("constraints", &[]);
        w.text("fissionable", &[], "true");
        w.close("constraints");
    }
    w.close("source");
    w.finish()
}

pub fn tallies_xml(set: &TallySet) -> String {
    let mut w = XmlWriter::new("tallies");
    for (k, mesh) in set.meshes.iter().enumerate() {
        w.open("mesh", &[("id", (k + 1).to_string())]);
        w.text("dimension", &[], &join(&mesh.dimension));
        w.text("lower_left", &[], &join(&mesh.lower_left));
        w.text("upper_right", &[], &join(&mesh.upper_right));
        w.close("mesh");
    }
    for (k, filter) in set.filters.iter().enumerate() {
        let bins = match filter {
            Filter::Cell(ids) => join(ids),
            Filter::Surface(ids) => join(ids),
            Filter::Energy(edges) => join(edges),
            // Registered by TallySet::new, so the lookup cannot miss.
            Filter::Mesh(mesh) => set.mesh_id(mesh).map(|id| id.to_string()).unwrap_or_default(),
        };
        w.open(
            "filter",
            &[
                ("id", (k + 1).to_string()),
                ("type", filter.type_name().to_string()),
            ],
        );
        w.text("bins", &[], &bins);
        w.close("filter");
    }
    for (k, (tally, ids)) in set.tallies.iter().zip(&set.filter_ids).enumerate() {
        w.open(
            "tally",
            &[("id", (k + 1).to_string()), ("name", tally.name.clone())],
        );
        if !ids.is_empty() {
            w.text("filters", &[], &join(ids));
        }
        w.text("scores", &[], &tally.scores.join(" "));
        w.close("tally");
    }
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Source;
    use crate::tallies::{RegularMesh, Tally};
    use fission_geometry::{GeometryBuilder, Region, SurfaceKind};
    use fission_types::config::RunConfig;
    use fission_types::material::{DensityUnit, MaterialId};
    use ndarray::Array2;

    #[test]
    fn test_writer_nesting_and_escape() {
        let mut w = XmlWriter::new("root");
        w.open("a", &[("name", "x<y & \"z\"".to_string())]);
        w.text("b", &[], "1 2");
        w.close("a");
        let out = w.finish();
        assert_eq!(
            out,
            "<?xml version='1.0' encoding='utf-8'?>\n<root>\n  <a name=\"x&lt;y &amp; &quot;z&quot;\">\n    <b>1 2</b>\n  </a>\n</root>\n"
        );
    }

    #[test]
    fn test_materials_xml() {
        let mut m = Material::new(MaterialId(1), "fuel");
        m.add_nuclide("U235", 0.05).unwrap();
        m.set_density(DensityUnit::GramPerCc, 10.0).unwrap();
        let out = materials_xml(&[m], Some("/data/cross_sections.xml"));
        assert!(out.contains("<cross_sections>/data/cross_sections.xml</cross_sections>"));
        assert!(out.contains("<material id=\"1\" name=\"fuel\">"));
        assert!(!out.contains("depletable"));
        assert!(out.contains("<density units=\"g/cm3\" value=\"10\"/>"));
        assert!(out.contains("<nuclide ao=\"0.05\" name=\"U235\"/>"));
    }

    #[test]
    fn test_geometry_xml_cells_surfaces_lattice() {
        let mut b = GeometryBuilder::new();
        let cyl = b.z_cylinder(0.39, None);
        let plane = b.surface(SurfaceKind::XPlane { x0: -5.0 }, BoundaryType::Vacuum, Some("min_x"));
        let fuel = b.cell(Some("fuel"), Fill::Material(MaterialId(1)), Some(Region::below(cyl)));
        let water = b.cell(None, Fill::Material(MaterialId(3)), Some(Region::above(cyl)));
        let pin = b.universe(Some("pin"), vec![fuel, water]);
        let map = Array2::from_elem((2, 2), pin);
        let lat = b.centred_lattice(None, 1.26, map, None);
        let root_cell = b.cell(Some("root"), Fill::Lattice(lat), Some(Region::above(plane)));
        let root = b.universe(None, vec![root_cell]);
        let g = b.finish(root).unwrap();

        let out = geometry_xml(&g);
        assert!(out.contains("<cell id=\"1\" material=\"1\" name=\"fuel\" region=\"-1\" universe=\"1\"/>"));
        assert!(out.contains("<cell fill=\"2\" id=\"3\" name=\"root\" region=\"2\" universe=\"3\"/>"));
        assert!(out.contains("<surface coeffs=\"0 0 0.39\" id=\"1\" type=\"z-cylinder\"/>"));
        assert!(out.contains("<surface boundary=\"vacuum\" coeffs=\"-5\" id=\"2\" name=\"min_x\" type=\"x-plane\"/>"));
        assert!(out.contains("<dimension>2 2</dimension>"));
        assert!(out.contains("<lower_left>-1.26 -1.26</lower_left>"));
        assert!(out.contains("<universes>\n1 1\n1 1\n"));
    }

    #[test]
    fn test_settings_xml_box_source() {
        let source = Source::fissionable_box([-0.63, -0.63, -1e6], [0.63, 0.63, 1e6]);
        let s = Settings::eigenvalue(&RunConfig::default(), source).unwrap();
        let out = settings_xml(&s);
        assert!(out.contains("<run_mode>eigenvalue</run_mode>"));
        assert!(out.contains("<space type=\"box\">"));
        assert!(out.contains("<parameters>-0.63 -0.63 -1000000 0.63 0.63 1000000</parameters>"));
        assert!(out.contains("<fissionable>true</fissionable>"));
    }

    #[test]
    fn test_tallies_xml_mesh_filter() {
        let mesh = RegularMesh::centred_square(2, 1.0);
        let tally = Tally::new("pin_power").filter(Filter::Mesh(mesh)).score("fission");
        let set = TallySet::new(vec![tally]).unwrap();
        let out = tallies_xml(&set);
        assert!(out.contains("<mesh id=\"1\">"));
        assert!(out.contains("<upper_right>1 1</upper_right>"));
        assert!(out.contains("<filter id=\"1\" type=\"mesh\">"));
        assert!(out.contains("<bins>1</bins>"));
        assert!(out.contains("<tally id=\"1\" name=\"pin_power\">"));
        assert!(out.contains("<filters>1</filters>"));
        assert!(out.contains("<scores>fission</scores>"));
    }
}
