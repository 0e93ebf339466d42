//! Typed accessors over individual category rows.
//!
//! Each wrapper borrows a [`Row`] and exposes the attributes of its category by
//! name. Getters never fail: an attribute missing from the category schema reads
//! as `None`, and numeric attributes that do not parse fall back to a default.

use super::category::{
    CHEM_COMP, CHEM_COMP_ATOM, CHEM_COMP_AUDIT, CHEM_COMP_BOND, CHEM_COMP_DESCRIPTOR,
    CHEM_COMP_IDENTIFIER,
};
use super::elements;
use super::schema::Row;
use nalgebra::Point3;

/// A typed view of one row from a specific category.
pub trait CategoryRow<'a>: Sized {
    /// Name of the category whose rows this type decodes.
    const CATEGORY: &'static str;

    fn from_row(row: Row<'a>) -> Self;

    fn row(&self) -> &Row<'a>;
}

macro_rules! category_row {
    ($name:ident, $category:expr) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a>(Row<'a>);

        impl<'a> CategoryRow<'a> for $name<'a> {
            const CATEGORY: &'static str = $category;

            fn from_row(row: Row<'a>) -> Self {
                Self(row)
            }

            fn row(&self) -> &Row<'a> {
                &self.0
            }
        }
    };
}

macro_rules! text_getters {
    ($($getter:ident => $attribute:literal),* $(,)?) => {
        $(
            pub fn $getter(&self) -> Option<&'a str> {
                self.0.get($attribute)
            }
        )*
    };
}

fn parse_point(x: Option<&str>, y: Option<&str>, z: Option<&str>) -> Option<Point3<f64>> {
    let parse = |v: Option<&str>| v.and_then(|s| s.trim().parse::<f64>().ok());
    Some(Point3::new(parse(x)?, parse(y)?, parse(z)?))
}

category_row!(ChemCompRow, CHEM_COMP);

impl<'a> ChemCompRow<'a> {
    text_getters! {
        id => "id",
        name => "name",
        comp_type => "type",
        pdbx_type => "pdbx_type",
        formula => "formula",
        synonyms => "pdbx_synonyms",
        formal_charge => "pdbx_formal_charge",
        initial_date => "pdbx_initial_date",
        modified_date => "pdbx_modified_date",
        release_status => "pdbx_release_status",
        formula_weight => "formula_weight",
        subcomponent_list => "pdbx_subcomponent_list",
        ambiguous_flag => "pdbx_ambiguous_flag",
        processing_site => "pdbx_processing_site",
        replaces => "pdbx_replaces",
        replaced_by => "pdbx_replaced_by",
        nstd_parent_id => "mon_nstd_parent_comp_id",
        one_letter_code => "one_letter_code",
        three_letter_code => "three_letter_code",
        model_coordinates_db_code => "pdbx_model_coordinates_db_code",
        missing_model_coordinates => "pdbx_model_coordinates_missing_flag",
        missing_ideal_coordinates => "pdbx_ideal_coordinates_missing_flag",
    }
}

category_row!(AtomRow, CHEM_COMP_ATOM);

impl<'a> AtomRow<'a> {
    text_getters! {
        name => "atom_id",
        type_symbol => "type_symbol",
        leaving_atom_flag => "pdbx_leaving_atom_flag",
        cip_stereo => "pdbx_stereo_config",
    }

    pub fn is_chiral(&self) -> bool {
        self.0.get("pdbx_stereo_config") != Some("N")
    }

    pub fn is_aromatic(&self) -> bool {
        self.0.get("pdbx_aromatic_flag") != Some("N")
    }

    /// Atomic number of the type symbol, or 0 when missing or unknown.
    pub fn atomic_number(&self) -> u8 {
        self.type_symbol().map_or(0, elements::atomic_number)
    }

    pub fn isotope(&self) -> u8 {
        self.type_symbol().map_or(0, elements::isotope)
    }

    pub fn formal_charge(&self) -> i32 {
        self.0
            .get("charge")
            .and_then(|c| c.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn model_coordinates(&self) -> Option<Point3<f64>> {
        parse_point(
            self.0.get("model_Cartn_x"),
            self.0.get("model_Cartn_y"),
            self.0.get("model_Cartn_z"),
        )
    }

    pub fn ideal_coordinates(&self) -> Option<Point3<f64>> {
        parse_point(
            self.0.get("pdbx_model_Cartn_x_ideal"),
            self.0.get("pdbx_model_Cartn_y_ideal"),
            self.0.get("pdbx_model_Cartn_z_ideal"),
        )
    }

    pub fn has_model_coordinates(&self) -> bool {
        self.model_coordinates().is_some()
    }

    pub fn has_ideal_coordinates(&self) -> bool {
        self.ideal_coordinates().is_some()
    }
}

category_row!(BondRow, CHEM_COMP_BOND);

impl<'a> BondRow<'a> {
    text_getters! {
        value_order => "value_order",
        stereo => "pdbx_stereo_config",
    }

    pub fn atoms(&self) -> (Option<&'a str>, Option<&'a str>) {
        (self.0.get("atom_id_1"), self.0.get("atom_id_2"))
    }

    /// Bond multiplicity from the value order code; 0 when unrecognized.
    pub fn integer_order(&self) -> u8 {
        match self.value_order() {
            Some("SING") => 1,
            Some("DOUB") => 2,
            Some("TRIP") => 3,
            Some("QUAD") => 4,
            _ => 0,
        }
    }

    pub fn is_aromatic(&self) -> bool {
        self.0.get("pdbx_aromatic_flag") == Some("Y")
    }

    pub fn has_stereo(&self) -> bool {
        self.stereo() != Some("N")
    }
}

category_row!(DescriptorRow, CHEM_COMP_DESCRIPTOR);

impl<'a> DescriptorRow<'a> {
    text_getters! {
        descriptor => "descriptor",
        descriptor_type => "type",
        program => "program",
        program_version => "program_version",
    }
}

category_row!(IdentifierRow, CHEM_COMP_IDENTIFIER);

impl<'a> IdentifierRow<'a> {
    text_getters! {
        identifier => "identifier",
        identifier_type => "type",
        program => "program",
        program_version => "program_version",
    }
}

category_row!(AuditRow, CHEM_COMP_AUDIT);

impl<'a> AuditRow<'a> {
    text_getters! {
        action_type => "action_type",
        date => "date",
        processing_site => "processing_site",
        annotator => "annotator",
        details => "details",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::schema::AttributeSchema;

    const ATOM_ATTRIBUTES: &[&str] = &[
        "comp_id",
        "atom_id",
        "type_symbol",
        "charge",
        "pdbx_aromatic_flag",
        "pdbx_stereo_config",
        "model_Cartn_x",
        "model_Cartn_y",
        "model_Cartn_z",
    ];

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn atom_row_reads_named_attributes() {
        let schema = AttributeSchema::new(ATOM_ATTRIBUTES);
        let data = owned(&["ETH", "C1", "C", "-1", "N", "R", "1.5", "-0.25", "3"]);
        let atom = AtomRow::from_row(Row::new(&schema, &data));

        assert_eq!(atom.name(), Some("C1"));
        assert_eq!(atom.type_symbol(), Some("C"));
        assert_eq!(atom.atomic_number(), 6);
        assert_eq!(atom.formal_charge(), -1);
        assert!(atom.is_chiral());
        assert!(!atom.is_aromatic());
        assert_eq!(atom.model_coordinates(), Some(Point3::new(1.5, -0.25, 3.0)));
    }

    #[test]
    fn atom_numeric_getters_fail_soft() {
        let schema = AttributeSchema::new(ATOM_ATTRIBUTES);
        let data = owned(&["ETH", "C1", "C", "?", "N", "N", "1.5", "?", "3"]);
        let atom = AtomRow::from_row(Row::new(&schema, &data));

        assert_eq!(atom.formal_charge(), 0);
        assert_eq!(atom.model_coordinates(), None);
        assert!(!atom.has_model_coordinates());
        assert!(!atom.has_ideal_coordinates());
    }

    #[test]
    fn atom_row_reports_deuterium_isotope() {
        let schema = AttributeSchema::new(ATOM_ATTRIBUTES);
        let data = owned(&["DOD", "D1", "D"]);
        let atom = AtomRow::from_row(Row::new(&schema, &data));

        assert_eq!(atom.atomic_number(), 1);
        assert_eq!(atom.isotope(), 2);
        assert_eq!(atom.formal_charge(), 0);
    }

    #[test]
    fn chem_comp_row_returns_none_for_attributes_outside_schema() {
        let schema = AttributeSchema::new(&["id", "name"]);
        let data = owned(&["ALA", "ALANINE"]);
        let row = ChemCompRow::from_row(Row::new(&schema, &data));

        assert_eq!(row.id(), Some("ALA"));
        assert_eq!(row.name(), Some("ALANINE"));
        assert_eq!(row.formula(), None);
        assert_eq!(row.nstd_parent_id(), None);
    }

    #[test]
    fn bond_row_maps_value_order_to_integer() {
        let schema = AttributeSchema::new(&[
            "atom_id_1",
            "atom_id_2",
            "value_order",
            "pdbx_aromatic_flag",
            "pdbx_stereo_config",
        ]);
        let cases = [("SING", 1), ("DOUB", 2), ("TRIP", 3), ("QUAD", 4), ("AROM", 0)];
        for (order, expected) in cases {
            let data = owned(&["C1", "C2", order, "Y", "N"]);
            let bond = BondRow::from_row(Row::new(&schema, &data));
            assert_eq!(bond.integer_order(), expected, "order {order}");
            assert!(bond.is_aromatic());
            assert!(!bond.has_stereo());
            assert_eq!(bond.atoms(), (Some("C1"), Some("C2")));
        }
    }

    #[test]
    fn descriptor_and_identifier_rows_expose_program_fields() {
        let schema = AttributeSchema::new(&["comp_id", "type", "program", "program_version", "descriptor"]);
        let data = owned(&["ETH", "SMILES", "OpenEye OEToolkits", "1.5.0", "CCO"]);
        let descriptor = DescriptorRow::from_row(Row::new(&schema, &data));
        assert_eq!(descriptor.descriptor(), Some("CCO"));
        assert_eq!(descriptor.descriptor_type(), Some("SMILES"));
        assert_eq!(descriptor.program_version(), Some("1.5.0"));

        let schema = AttributeSchema::new(&["comp_id", "type", "program", "identifier"]);
        let data = owned(&["ETH", "SYSTEMATIC NAME", "ACDLabs", "ethanol"]);
        let identifier = IdentifierRow::from_row(Row::new(&schema, &data));
        assert_eq!(identifier.identifier(), Some("ethanol"));
        assert_eq!(identifier.program(), Some("ACDLabs"));
        assert_eq!(identifier.program_version(), None);
    }

    #[test]
    fn audit_row_reads_audit_fields() {
        let schema = AttributeSchema::new(&["comp_id", "action_type", "date", "annotator"]);
        let data = owned(&["ETH", "Create component", "1999-07-08", "RCSB"]);
        let audit = AuditRow::from_row(Row::new(&schema, &data));
        assert_eq!(audit.action_type(), Some("Create component"));
        assert_eq!(audit.date(), Some("1999-07-08"));
        assert_eq!(audit.annotator(), Some("RCSB"));
        assert_eq!(audit.details(), None);
        assert_eq!(AuditRow::CATEGORY, "pdbx_chem_comp_audit");
    }
}
