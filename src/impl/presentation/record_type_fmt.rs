use crate::entities::{BadgeColor, TypeCode};

impl TypeCode {
    /// Human-readable name of the record type. Unknown codes get a generic
    /// "Record {code}" label, so every code the builder sees has a name.
    pub fn display_name(&self) -> String {
        match self.as_str() {
            "01" | "BH" | "10" | "02" => "Batch Header",
            "47" | "DT" => "Detail Transaction",
            "98" | "TR" | "99" => "Trailer",
            "A1" | "A2" => "Airline Extension",
            "E1" => "E-Commerce Extension",
            "G2" => "Geographic Extension",
            "P1" | "P2" => "Purchasing Card Extension",
            "LG" => "Lodging Extension",
            "CT" => "Car Rental Extension",
            "AD" => "Merchant Adjustment Extension",
            "DR" => "Direct Marketing Extension",
            other => return format!("Record {}", other),
        }
        .into()
    }

    pub fn badge_color(&self) -> BadgeColor {
        match self.as_str() {
            "01" | "BH" | "10" | "02" => BadgeColor::Blue,
            "47" | "DT" => BadgeColor::Green,
            "98" | "TR" | "99" => BadgeColor::Red,
            "A1" | "A2" => BadgeColor::Indigo,
            "E1" => BadgeColor::Purple,
            "G2" => BadgeColor::Teal,
            "P1" | "P2" => BadgeColor::Orange,
            "LG" => BadgeColor::Amber,
            "CT" | "DR" => BadgeColor::Pink,
            _ => BadgeColor::Gray,
        }
    }
}

impl BadgeColor {
    /// CSS utility classes for the record type badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeColor::Blue => "bg-blue-100 text-blue-800",
            BadgeColor::Green => "bg-green-100 text-green-800",
            BadgeColor::Red => "bg-red-100 text-red-800",
            BadgeColor::Purple => "bg-purple-100 text-purple-800",
            BadgeColor::Orange => "bg-orange-100 text-orange-800",
            BadgeColor::Teal => "bg-teal-100 text-teal-800",
            BadgeColor::Amber => "bg-amber-100 text-amber-800",
            BadgeColor::Indigo => "bg-indigo-100 text-indigo-800",
            BadgeColor::Pink => "bg-pink-100 text-pink-800",
            BadgeColor::Gray => "bg-gray-100 text-gray-800",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RecordRole;
    use pretty_assertions::assert_eq;

    #[test]
    fn core_roles_share_names_across_aliases() {
        for code in ["01", "BH", "10", "02"] {
            assert_eq!(TypeCode::from(code).display_name(), "Batch Header");
        }
        assert_eq!(TypeCode::from("47").display_name(), "Detail Transaction");
        assert_eq!(TypeCode::from("99").display_name(), "Trailer");
    }

    #[test]
    fn unknown_codes_get_generic_label() {
        assert_eq!(TypeCode::from("ZZ").display_name(), "Record ZZ");
        assert_eq!(TypeCode::from("ZZ").badge_color(), BadgeColor::Gray);
        assert_eq!(TypeCode::from("ZZ").role(), RecordRole::Extension);
    }

    #[test]
    fn named_extensions_have_their_own_badges() {
        assert_eq!(TypeCode::from("G2").display_name(), "Geographic Extension");
        assert_eq!(
            TypeCode::from("G2").badge_color().css_class(),
            "bg-teal-100 text-teal-800"
        );
    }
}
