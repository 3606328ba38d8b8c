use std::collections::HashSet;

/// Fixed work order header. Column order defines the field order of every data line.
pub const HEADER_ROW: [&str; 8] = [
    "Resource ID",
    "Ref ID",
    "URI",
    "Container Indicator 1",
    "Container Indicator 2",
    "Container Indicator 3",
    "Title",
    "Component ID",
];

/// One line of the work order: a single archival component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManifestRow {
    pub resource_id: String,
    pub ref_id: String,
    pub uri: String,
    pub container_indicator_1: String,
    pub container_indicator_2: String,
    pub container_indicator_3: String,
    pub title: String,
    /// Package suffix; unique within a well-formed work order.
    pub component_id: String,
}

impl ManifestRow {
    /// Build from exactly [`HEADER_ROW`]`.len()` fields in header order.
    pub fn from_fields(fields: [&str; 8]) -> Self {
        let [
            resource_id,
            ref_id,
            uri,
            ci1,
            ci2,
            ci3,
            title,
            component_id,
        ] = fields.map(str::to_string);
        Self {
            resource_id,
            ref_id,
            uri,
            container_indicator_1: ci1,
            container_indicator_2: ci2,
            container_indicator_3: ci3,
            title,
            component_id,
        }
    }

    /// Fields in header order.
    pub fn fields(&self) -> [&str; 8] {
        [
            self.resource_id.as_str(),
            self.ref_id.as_str(),
            self.uri.as_str(),
            self.container_indicator_1.as_str(),
            self.container_indicator_2.as_str(),
            self.container_indicator_3.as_str(),
            self.title.as_str(),
            self.component_id.as_str(),
        ]
    }

    /// Tab-joined line, no trailing newline.
    pub fn to_tsv_line(&self) -> String {
        self.fields().join("\t")
    }
}

/// Parsed work order: rows in file order. Never mutated after parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Manifest {
    pub rows: Vec<ManifestRow>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Component IDs appearing more than once, each reported once, in first-repeat order.
    pub fn duplicate_component_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut dups = Vec::new();
        for row in &self.rows {
            let id = row.component_id.as_str();
            if !seen.insert(id) && reported.insert(id) {
                dups.push(id);
            }
        }
        dups
    }
}

/// Header line as written to per-component work orders.
pub fn header_line() -> String {
    HEADER_ROW.join("\t")
}
