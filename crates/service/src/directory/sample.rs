//! Built-in demo catalog: six organizations and one donor's history.

use chrono::NaiveDate;
use models::{
    Certificate, Coordinates, Donation, DonationNeed, DonationStatus, DonationType, Event, EventStatus,
    GalleryKind, GalleryPhoto, LeaderboardEntry, Organization, Priority,
};
use once_cell::sync::Lazy;

use super::catalog::Catalog;

static SAMPLE: Lazy<Catalog> = Lazy::new(build);

/// The shared sample catalog.
pub fn catalog() -> &'static Catalog {
    &SAMPLE
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn need(id: &str, kind: DonationType, description: &str, priority: Priority) -> DonationNeed {
    DonationNeed { id: id.into(), kind, description: description.into(), priority, quantity: None }
}

fn photo(id: &str, url: &str, caption: &str, on: NaiveDate, kind: GalleryKind) -> GalleryPhoto {
    GalleryPhoto { id: id.into(), image_url: url.into(), caption: caption.into(), date: on, kind }
}

struct OrgSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    address: &'static str,
    image: &'static str,
    phone: &'static str,
    email: &'static str,
    website: &'static str,
    coordinates: Coordinates,
    distance: f64,
    priority: Priority,
    donation_count: u32,
    accepts_events: bool,
}

impl OrgSeed {
    fn into_org(self, needs: Vec<DonationNeed>, gallery: Vec<GalleryPhoto>) -> Organization {
        Organization {
            id: self.id.into(),
            name: self.name.into(),
            description: self.description.into(),
            address: self.address.into(),
            image: self.image.into(),
            phone: self.phone.into(),
            email: self.email.into(),
            website: Some(self.website.into()),
            coordinates: self.coordinates,
            distance: self.distance,
            priority_level: self.priority,
            verified: true,
            donation_needs: needs,
            donation_count: self.donation_count,
            accepts_events: self.accepts_events,
            photo_gallery: gallery,
        }
    }
}

fn organizations() -> Vec<Organization> {
    use DonationType::*;

    vec![
        OrgSeed {
            id: "org1",
            name: "Hope Children's Home",
            description: "An orphanage dedicated to providing a loving home for children in need, with focus on education and holistic development.",
            address: "123 Main St, New Delhi, 110001",
            image: "https://images.pexels.com/photos/1250452/pexels-photo-1250452.jpeg",
            phone: "+91 98765 43210",
            email: "contact@hopechildren.org",
            website: "www.hopechildren.org",
            coordinates: Coordinates::new(28.6139, 77.2090),
            distance: 2.3,
            priority: Priority::HIGH,
            donation_count: 156,
            accepts_events: true,
        }
        .into_org(
            vec![
                need("need1", Food, "Non-perishable food items like rice, lentils, and cooking oil", Priority::HIGH),
                need("need2", Books, "Educational books for children aged 5-15 years", Priority::MEDIUM),
                need("need3", Clothes, "Winter clothes for children aged 3-16 years", Priority::MEDIUM),
            ],
            vec![
                photo("g1", "https://images.pexels.com/photos/6646917/pexels-photo-6646917.jpeg", "Children enjoying their new books from a recent donation", date(2024, 3, 15), GalleryKind::Donation),
                photo("g2", "https://images.pexels.com/photos/6646918/pexels-photo-6646918.jpeg", "Birthday celebration event with donors", date(2024, 2, 20), GalleryKind::Event),
                photo("g3", "https://images.pexels.com/photos/6646919/pexels-photo-6646919.jpeg", "Our newly renovated study room", date(2024, 1, 10), GalleryKind::Facility),
            ],
        ),
        OrgSeed {
            id: "org2",
            name: "Golden Years Foundation",
            description: "An old age home providing care, comfort and dignity to the elderly who need support and assistance in their golden years.",
            address: "45 Park Avenue, Mumbai, 400001",
            image: "https://images.pexels.com/photos/339620/pexels-photo-339620.jpeg",
            phone: "+91 99887 76655",
            email: "info@goldenyears.org",
            website: "www.goldenyears.org",
            coordinates: Coordinates::new(19.0760, 72.8777),
            distance: 4.8,
            priority: Priority::MEDIUM,
            donation_count: 98,
            accepts_events: true,
        }
        .into_org(
            vec![
                need("need4", Food, "Nutritious food items suitable for elderly people", Priority::HIGH),
                need("need5", Infrastructure, "Wheelchairs, walking aids, and medical equipment", Priority::MEDIUM),
                need("need6", Money, "Financial assistance for medical treatments", Priority::HIGH),
            ],
            vec![
                photo("g4", "https://images.pexels.com/photos/7551617/pexels-photo-7551617.jpeg", "Elderly residents enjoying the new garden area", date(2024, 3, 10), GalleryKind::Facility),
                photo("g5", "https://images.pexels.com/photos/7551618/pexels-photo-7551618.jpeg", "Music therapy session with volunteers", date(2024, 2, 15), GalleryKind::Event),
            ],
        ),
        OrgSeed {
            id: "org3",
            name: "Better Tomorrow NGO",
            description: "A community-focused NGO working on education, health, and poverty alleviation in underprivileged areas.",
            address: "78 Civil Lines, Jaipur, 302006",
            image: "https://images.pexels.com/photos/6646918/pexels-photo-6646918.jpeg",
            phone: "+91 93456 78901",
            email: "contact@bettertomorrow.org",
            website: "www.bettertomorrow.org",
            coordinates: Coordinates::new(26.9124, 75.7873),
            distance: 5.1,
            priority: Priority::LOW,
            donation_count: 211,
            accepts_events: false,
        }
        .into_org(
            vec![
                need("need7", Books, "Books for community libraries in rural areas", Priority::LOW),
                need("need8", Infrastructure, "Computer equipment for digital literacy programs", Priority::MEDIUM),
            ],
            Vec::new(),
        ),
        OrgSeed {
            id: "org4",
            name: "Child Dreams Foundation",
            description: "Working towards providing education, healthcare, and nutrition to underprivileged children across multiple states.",
            address: "56 Green Park, Bangalore, 560001",
            image: "https://images.pexels.com/photos/6646917/pexels-photo-6646917.jpeg",
            phone: "+91 97654 32109",
            email: "support@childdreams.org",
            website: "www.childdreams.org",
            coordinates: Coordinates::new(12.9716, 77.5946),
            distance: 3.7,
            priority: Priority::HIGH,
            donation_count: 187,
            accepts_events: true,
        }
        .into_org(
            vec![
                need("need9", Food, "Nutritional supplements and meals for malnourished children", Priority::HIGH),
                need("need10", Books, "Educational books and school supplies", Priority::MEDIUM),
                need("need11", Clothes, "Uniforms and daily wear for children", Priority::MEDIUM),
            ],
            Vec::new(),
        ),
        OrgSeed {
            id: "org5",
            name: "Dignity Elder Care",
            description: "Providing compassionate care and a homely environment for senior citizens who need assistance and companionship.",
            address: "34 Church Street, Chennai, 600001",
            image: "https://images.pexels.com/photos/7551617/pexels-photo-7551617.jpeg",
            phone: "+91 96543 21098",
            email: "care@dignityelder.org",
            website: "www.dignityelder.org",
            coordinates: Coordinates::new(13.0827, 80.2707),
            distance: 6.4,
            priority: Priority::MEDIUM,
            donation_count: 134,
            accepts_events: true,
        }
        .into_org(
            vec![
                need("need12", Infrastructure, "Medical equipment and mobility aids", Priority::HIGH),
                need("need13", Food, "Special dietary foods for elderly with health conditions", Priority::MEDIUM),
            ],
            Vec::new(),
        ),
        OrgSeed {
            id: "org6",
            name: "Rural Upliftment Society",
            description: "Focusing on sustainable development in rural communities through education, skill development, and agricultural support.",
            address: "12 Gandhi Road, Lucknow, 226001",
            image: "https://images.pexels.com/photos/296234/pexels-photo-296234.jpeg",
            phone: "+91 95432 10987",
            email: "info@ruralupliftment.org",
            website: "www.ruralupliftment.org",
            coordinates: Coordinates::new(26.8467, 80.9462),
            distance: 7.9,
            priority: Priority::LOW,
            donation_count: 76,
            accepts_events: false,
        }
        .into_org(
            vec![
                need("need14", Infrastructure, "Agricultural tools and equipment for farmers", Priority::MEDIUM),
                need("need15", Books, "Educational materials for rural schools", Priority::LOW),
            ],
            Vec::new(),
        ),
    ]
}

fn donation(
    id: &str,
    org: &str,
    kind: DonationType,
    description: &str,
    on: NaiveDate,
    status: DonationStatus,
    award: Option<(&str, u32)>,
) -> Donation {
    Donation {
        id: id.into(),
        donor_id: "d1".into(),
        organization_id: org.into(),
        kind,
        description: description.into(),
        date: on,
        status,
        certificate_id: award.map(|(cert, _)| cert.to_string()),
        points_awarded: award.map(|(_, points)| points),
    }
}

fn donations() -> Vec<Donation> {
    use DonationStatus::*;
    use DonationType::*;

    vec![
        donation("don1", "org1", Food, "Monthly supply of rice, lentils, and cooking oil", date(2023, 11, 15), Completed, Some(("cert1", 50))),
        donation("don2", "org2", Money, "Financial contribution for medical expenses", date(2023, 12, 5), Completed, Some(("cert2", 75))),
        donation("don3", "org4", Books, "Educational books for children aged 6-12", date(2024, 1, 20), Completed, Some(("cert3", 40))),
        donation("don4", "org1", Clothes, "Winter clothes for children", date(2024, 2, 10), Completed, Some(("cert4", 35))),
        donation("don5", "org5", Infrastructure, "Two wheelchairs and medical equipment", date(2024, 3, 5), Pending, None),
    ]
}

fn certificates() -> Vec<Certificate> {
    [
        ("cert1", "don1", "org1", date(2023, 11, 15), "VER12345"),
        ("cert2", "don2", "org2", date(2023, 12, 5), "VER23456"),
        ("cert3", "don3", "org4", date(2024, 1, 20), "VER34567"),
        ("cert4", "don4", "org1", date(2024, 2, 10), "VER45678"),
    ]
    .into_iter()
    .map(|(id, donation_id, org, on, code)| Certificate {
        id: id.into(),
        donation_id: donation_id.into(),
        donor_id: "d1".into(),
        organization_id: org.into(),
        date: on,
        verification_code: code.into(),
        download_url: "#".into(),
    })
    .collect()
}

fn events() -> Vec<Event> {
    let event = |id: &str, org: &str, title: &str, description: &str, on, status, attendees| Event {
        id: id.to_string(),
        donor_id: "d1".into(),
        organization_id: org.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: on,
        status,
        attendees,
    };
    vec![
        event("evt1", "org1", "Birthday Celebration", "Celebrating my daughter's birthday with the children", date(2024, 1, 15), EventStatus::Completed, Some(25)),
        event("evt2", "org2", "Music Session", "Organizing a musical evening for the elderly residents", date(2024, 2, 28), EventStatus::Approved, Some(20)),
        event("evt3", "org4", "Educational Workshop", "Conducting a science workshop for the children", date(2024, 4, 10), EventStatus::Pending, None),
    ]
}

fn leaderboard() -> Vec<LeaderboardEntry> {
    [
        ("user1", "Priya Sharma", "women/32", 785, 23),
        ("user2", "Rahul Verma", "men/41", 650, 18),
        ("d1", "John Donor", "men/64", 250, 12),
        ("user4", "Meera Patel", "women/45", 235, 10),
        ("user5", "Arun Singh", "men/12", 190, 8),
        ("user6", "Divya Kumar", "women/22", 175, 7),
        ("user7", "Karan Malhotra", "men/33", 150, 6),
        ("user8", "Ananya Gupta", "women/58", 120, 5),
    ]
    .into_iter()
    .zip(1u32..)
    .map(|((donor_id, name, portrait, points, count), rank)| LeaderboardEntry {
        id: format!("lead{rank}"),
        donor_id: donor_id.into(),
        donor_name: name.into(),
        donor_image: Some(format!("https://randomuser.me/api/portraits/{portrait}.jpg")),
        points,
        donation_count: count,
        rank,
    })
    .collect()
}

fn build() -> Catalog {
    Catalog {
        organizations: organizations(),
        donations: donations(),
        events: events(),
        certificates: certificates(),
        leaderboard: leaderboard(),
    }
}
