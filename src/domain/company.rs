// src/domain/company.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    pub slogan: String,
    pub description: String,
    pub founded: i32,
    pub headquarters: String,
    pub employees: u32,
    pub mission: String,
    pub vision: String,
    pub values: Vec<String>,
    pub features: Vec<Feature>,
    pub testimonials: Vec<Testimonial>,
    pub stats: CompanyStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    /// Icon key: "search", "vr", "calculator" or "shield".
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub comment: String,
    /// 1..=5 stars.
    pub rating: u8,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub properties_sold: u64,
    pub happy_customers: u64,
    pub cities_covered: u32,
    pub average_days_to_sell: u32,
}

/// Someone shown on the About page.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "John Smith",
        role: "CEO & Founder",
        image: "https://randomuser.me/api/portraits/men/32.jpg",
    },
    TeamMember {
        name: "Sarah Johnson",
        role: "CTO",
        image: "https://randomuser.me/api/portraits/women/44.jpg",
    },
    TeamMember {
        name: "Michael Chen",
        role: "Head of Product",
        image: "https://randomuser.me/api/portraits/men/67.jpg",
    },
    TeamMember {
        name: "Emily Rodriguez",
        role: "Lead Designer",
        image: "https://randomuser.me/api/portraits/women/33.jpg",
    },
];
