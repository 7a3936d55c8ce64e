// Static storefront catalog data.

use crate::components::icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub product_count: u32,
}

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "equipment",
        title: "Dental Equipment",
        description: "Professional dental chairs, units, and major equipment",
        icon: Icon::Stethoscope,
        product_count: 234,
    },
    Category {
        id: "instruments",
        title: "Instruments",
        description: "Hand instruments, drills, and precision tools",
        icon: Icon::Wrench,
        product_count: 156,
    },
    Category {
        id: "consumables",
        title: "Consumables",
        description: "Dental materials, adhesives, and disposables",
        icon: Icon::Pill,
        product_count: 789,
    },
    Category {
        id: "oral-care",
        title: "Oral Care Products",
        description: "Toothbrushes, paste, mouthwash, and preventive care",
        icon: Icon::Smile,
        product_count: 89,
    },
    Category {
        id: "technology",
        title: "Digital Technology",
        description: "Digital imaging, CAD/CAM, and practice management software",
        icon: Icon::Monitor,
        product_count: 67,
    },
    Category {
        id: "laboratory",
        title: "Laboratory Equipment",
        description: "Lab equipment, impression materials, and prosthetics",
        icon: Icon::Package,
        product_count: 123,
    },
    Category {
        id: "tourism",
        title: "Dental Tourism",
        description: "Travel packages and international dental services",
        icon: Icon::Plane,
        product_count: 45,
    },
];

#[cfg(test)]
mod tests {
    use super::CATEGORIES;

    #[test]
    fn category_ids_are_unique() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_category_is_fully_described() {
        assert!(!CATEGORIES.is_empty());
        for category in CATEGORIES {
            assert!(!category.title.is_empty());
            assert!(!category.description.is_empty());
            assert!(category.product_count > 0);
        }
    }
}
