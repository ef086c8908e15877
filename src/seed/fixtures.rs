use serde_json::{json, Value};

use crate::clock;
use crate::model::entities::*;
use crate::model::EntitySpec;

const CLUBS: [&str; 20] = [
    "Cheer",
    "Dance",
    "Softball",
    "Boys Soccer",
    "Girls Soccer",
    "Boys Swim and Dive",
    "Girls Swim and Dive",
    "Wrestling",
    "Robotics",
    "Volleyball",
    "Boys Basketball",
    "Girls Basketball",
    "Boys Golf",
    "Girls Golf",
    "DECCA",
    "Theater",
    "Choir",
    "Gymnastics",
    "Orchestra",
    "Band",
];

/// Sample records per entity, in load order.
pub(super) fn sample_sets() -> Vec<(&'static EntitySpec, Vec<Value>)> {
    vec![
        (&MEMBERS, members()),
        (&DONATIONS, donations()),
        (&BOOSTER_CLUBS, booster_clubs()),
        (&VENDORS, vendors()),
        (&USERS, users()),
        (&EVENTS, events()),
        (&FUNDRAISING_EVENTS, fundraising_events()),
        (&VOLUNTEER_HOURS, volunteer_hours()),
        (&FINANCIAL_TRANSACTIONS, financial_transactions()),
        (&ANALYTICS, analytics()),
        (&GOALS, goals()),
        (&ACHIEVEMENTS, achievements()),
        (&INVENTORY, inventory()),
        (&EQUIPMENT, equipment()),
        (&COMPLIANCE_RECORDS, compliance_records()),
    ]
}

fn members() -> Vec<Value> {
    vec![
        json!({
            "name": "John Smith",
            "email": "john.smith@email.com",
            "tier": "gold",
            "paymentType": "recurring",
            "joinDate": "2024-01-15",
            "status": "active"
        }),
        json!({
            "name": "Sarah Johnson",
            "email": "sarah.j@email.com",
            "tier": "silver",
            "paymentType": "one-time",
            "joinDate": "2024-01-10",
            "status": "active"
        }),
        json!({
            "name": "Mike Davis",
            "email": "mike.davis@email.com",
            "tier": "basic",
            "paymentType": "recurring",
            "joinDate": "2024-01-08",
            "status": "active"
        }),
    ]
}

fn donations() -> Vec<Value> {
    vec![
        json!({
            "donorName": "Anonymous",
            "donorEmail": "anonymous@email.com",
            "amount": 500,
            "tier": "diamond",
            "paymentMethod": "Stripe",
            "date": "2024-01-15",
            "status": "completed"
        }),
        json!({
            "donorName": "Lisa Wilson",
            "donorEmail": "lisa.wilson@email.com",
            "amount": 100,
            "tier": "gold",
            "paymentMethod": "Zelle",
            "date": "2024-01-14",
            "status": "pending"
        }),
        json!({
            "donorName": "Robert Brown",
            "donorEmail": "robert.brown@email.com",
            "amount": 25,
            "tier": "bronze",
            "paymentMethod": "Stripe",
            "date": "2024-01-13",
            "status": "completed"
        }),
    ]
}

fn booster_clubs() -> Vec<Value> {
    CLUBS
        .iter()
        .map(|name| json!({"name": name, "status": "active"}))
        .collect()
}

fn vendors() -> Vec<Value> {
    vec![json!({
        "businessName": "Dirk Huebner Training",
        "taxId": "12-3456789",
        "address": "123 Main St, Sammamish, WA 98074",
        "boosterClub": "Cross Country",
        "services": "Strength Training"
    })]
}

fn users() -> Vec<Value> {
    let now = clock::now_iso();
    vec![
        json!({
            "email": "admin@eastlakewolfpack.org",
            "role": "admin",
            "status": "active",
            "lastLogin": now
        }),
        json!({
            "email": "cheer.admin@eastlakewolfpack.org",
            "role": "booster_admin",
            "status": "active",
            "boosterClub": "Cheer",
            "lastLogin": now
        }),
        json!({
            "email": "soccer.admin@eastlakewolfpack.org",
            "role": "booster_admin",
            "status": "active",
            "boosterClub": "Boys Soccer",
            "lastLogin": now
        }),
    ]
}

fn events() -> Vec<Value> {
    vec![
        json!({
            "eventName": "Homecoming Game",
            "eventType": "sports",
            "date": "2024-10-15",
            "time": "19:00",
            "location": "Eastlake Stadium",
            "boosterClub": "Football",
            "description": "Annual homecoming football game",
            "status": "upcoming"
        }),
        json!({
            "eventName": "Cheer Competition",
            "eventType": "competition",
            "date": "2024-11-20",
            "time": "14:00",
            "location": "Sammamish High School",
            "boosterClub": "Cheer",
            "description": "Regional cheerleading competition",
            "status": "upcoming"
        }),
        json!({
            "eventName": "Basketball Tournament",
            "eventType": "tournament",
            "date": "2024-12-05",
            "time": "09:00",
            "location": "Eastlake Gymnasium",
            "boosterClub": "Boys Basketball",
            "description": "Holiday basketball tournament",
            "status": "upcoming"
        }),
    ]
}

fn fundraising_events() -> Vec<Value> {
    vec![
        json!({
            "eventName": "Car Wash Fundraiser",
            "date": "2024-09-30",
            "boosterClub": "Cheer",
            "goalAmount": 2000,
            "currentAmount": 1500,
            "description": "Annual car wash fundraiser",
            "status": "active"
        }),
        json!({
            "eventName": "Silent Auction",
            "date": "2024-11-15",
            "boosterClub": "Band",
            "goalAmount": 5000,
            "currentAmount": 3200,
            "description": "Silent auction fundraiser",
            "status": "active"
        }),
        json!({
            "eventName": "Bake Sale",
            "date": "2024-10-25",
            "boosterClub": "Softball",
            "goalAmount": 800,
            "currentAmount": 650,
            "description": "Bake sale fundraiser",
            "status": "active"
        }),
    ]
}

fn volunteer_hours() -> Vec<Value> {
    vec![
        json!({
            "volunteerId": 1,
            "volunteerName": "Sarah Johnson",
            "date": "2024-09-15",
            "hours": 4,
            "eventId": 1,
            "boosterClub": "Cheer",
            "description": "Car wash fundraiser",
            "status": "approved"
        }),
        json!({
            "volunteerId": 2,
            "volunteerName": "Mike Davis",
            "date": "2024-09-20",
            "hours": 6,
            "eventId": 2,
            "boosterClub": "Band",
            "description": "Silent auction setup",
            "status": "approved"
        }),
        json!({
            "volunteerId": 3,
            "volunteerName": "Lisa Wilson",
            "date": "2024-09-25",
            "hours": 3,
            "eventId": 3,
            "boosterClub": "Softball",
            "description": "Bake sale",
            "status": "pending"
        }),
    ]
}

fn financial_transactions() -> Vec<Value> {
    vec![
        json!({
            "transactionId": "TXN_001",
            "type": "donation",
            "amount": 100,
            "paymentMethod": "stripe",
            "boosterClub": "Cheer",
            "description": "Donation from John Smith",
            "status": "completed",
            "date": "2024-09-15"
        }),
        json!({
            "transactionId": "TXN_002",
            "type": "membership",
            "amount": 50,
            "paymentMethod": "zelle",
            "boosterClub": "Band",
            "description": "Silver membership payment",
            "status": "completed",
            "date": "2024-09-16"
        }),
        json!({
            "transactionId": "TXN_003",
            "type": "expense",
            "amount": -25,
            "paymentMethod": "check",
            "boosterClub": "Football",
            "description": "Equipment purchase",
            "status": "completed",
            "date": "2024-09-17"
        }),
    ]
}

fn analytics() -> Vec<Value> {
    [
        ("total_members", 150, "membership"),
        ("total_donations", 5000, "financial"),
        ("active_volunteers", 45, "volunteer"),
        ("website_visits", 1200, "engagement"),
    ]
    .into_iter()
    .map(|(metric, value, category)| {
        json!({
            "metricName": metric,
            "value": value,
            "category": category,
            "boosterClub": "all",
            "date": "2024-09-01"
        })
    })
    .collect()
}

fn goals() -> Vec<Value> {
    vec![
        json!({
            "goalType": "fundraising",
            "title": "Increase Annual Donations",
            "description": "Increase total donations by 20%",
            "targetAmount": 6000,
            "currentAmount": 5000,
            "targetDate": "2024-12-31",
            "boosterClub": "all",
            "priority": "high",
            "status": "in_progress"
        }),
        json!({
            "goalType": "membership",
            "title": "Grow Membership",
            "description": "Increase membership by 50 members",
            "targetAmount": 200,
            "currentAmount": 150,
            "targetDate": "2024-12-31",
            "boosterClub": "all",
            "priority": "medium",
            "status": "in_progress"
        }),
        json!({
            "goalType": "volunteer",
            "title": "Volunteer Hours",
            "description": "Log 1000 volunteer hours",
            "targetAmount": 1000,
            "currentAmount": 750,
            "targetDate": "2024-12-31",
            "boosterClub": "all",
            "priority": "medium",
            "status": "in_progress"
        }),
    ]
}

fn achievements() -> Vec<Value> {
    vec![
        json!({
            "achievementType": "fundraising",
            "title": "Fundraising Goal Met",
            "description": "Reached $5000 fundraising goal",
            "boosterClub": "Cheer",
            "category": "financial",
            "dateAchieved": "2024-08-15"
        }),
        json!({
            "achievementType": "membership",
            "title": "Membership Milestone",
            "description": "Reached 100 active members",
            "boosterClub": "all",
            "category": "membership",
            "dateAchieved": "2024-08-20"
        }),
        json!({
            "achievementType": "volunteer",
            "title": "Volunteer Recognition",
            "description": "500 volunteer hours logged",
            "boosterClub": "all",
            "category": "volunteer",
            "dateAchieved": "2024-08-25"
        }),
    ]
}

fn inventory() -> Vec<Value> {
    let now = clock::now_iso();
    vec![
        json!({
            "itemName": "Cheer Uniforms",
            "category": "uniforms",
            "quantity": 25,
            "boosterClub": "Cheer",
            "location": "Equipment Room A",
            "status": "available",
            "lastUpdated": now
        }),
        json!({
            "itemName": "Basketballs",
            "category": "equipment",
            "quantity": 15,
            "boosterClub": "Boys Basketball",
            "location": "Gym Storage",
            "status": "available",
            "lastUpdated": now
        }),
        json!({
            "itemName": "Soccer Balls",
            "category": "equipment",
            "quantity": 8,
            "boosterClub": "Boys Soccer",
            "location": "Equipment Room B",
            "status": "low_stock",
            "lastUpdated": now
        }),
    ]
}

fn equipment() -> Vec<Value> {
    vec![
        json!({
            "equipmentName": "Sound System",
            "category": "audio",
            "boosterClub": "Band",
            "location": "Band Room",
            "status": "operational",
            "lastMaintenance": "2024-08-01",
            "nextMaintenance": "2024-11-01"
        }),
        json!({
            "equipmentName": "Scoreboard",
            "category": "electronics",
            "boosterClub": "Football",
            "location": "Stadium",
            "status": "operational",
            "lastMaintenance": "2024-07-15",
            "nextMaintenance": "2024-10-15"
        }),
        json!({
            "equipmentName": "Tackling Dummies",
            "category": "training",
            "boosterClub": "Football",
            "location": "Practice Field",
            "status": "needs_maintenance",
            "lastMaintenance": "2024-06-01",
            "nextMaintenance": "2024-09-01"
        }),
    ]
}

fn compliance_records() -> Vec<Value> {
    vec![
        json!({
            "recordType": "insurance_certificate",
            "boosterClub": "Cheer",
            "documentName": "Cheer Insurance Certificate 2024",
            "issueDate": "2024-01-01",
            "expiryDate": "2024-12-31",
            "status": "active",
            "documentUrl": "/documents/cheer-insurance-2024.pdf"
        }),
        json!({
            "recordType": "background_check",
            "boosterClub": "Football",
            "documentName": "Coach Background Check",
            "issueDate": "2024-08-01",
            "expiryDate": "2025-08-01",
            "status": "active",
            "documentUrl": "/documents/coach-background-check.pdf"
        }),
        json!({
            "recordType": "safety_certification",
            "boosterClub": "Swimming",
            "documentName": "Lifeguard Certification",
            "issueDate": "2024-06-01",
            "expiryDate": "2024-12-01",
            "status": "expiring_soon",
            "documentUrl": "/documents/lifeguard-cert.pdf"
        }),
    ]
}
