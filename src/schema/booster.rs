use super::{CollectionSchema, IndexSpec};

// Struct literals rather than const fn calls so the nested index slices
// are promoted to 'static.
macro_rules! ix {
    ($field:literal) => {
        IndexSpec {
            field: $field,
            unique: false,
        }
    };
}

macro_rules! uq {
    ($field:literal) => {
        IndexSpec {
            field: $field,
            unique: true,
        }
    };
}

/// Collections of the booster-club association, in declaration order.
pub static BOOSTER_COLLECTIONS: &[CollectionSchema] = &[
    // Core data
    CollectionSchema::auto(
        "members",
        &[
            uq!("email"),
            ix!("tier"),
            ix!("status"),
            ix!("joinDate"),
            ix!("paymentType"),
            ix!("city"),
            ix!("state"),
        ],
    ),
    CollectionSchema::auto(
        "donations",
        &[
            ix!("donorEmail"),
            ix!("amount"),
            ix!("tier"),
            ix!("date"),
            ix!("status"),
            ix!("paymentMethod"),
            ix!("boosterClub"),
        ],
    ),
    CollectionSchema::auto(
        "vendors",
        &[
            uq!("taxId"),
            ix!("boosterClub"),
            ix!("businessName"),
            ix!("totalPaid"),
        ],
    ),
    CollectionSchema::auto(
        "insurance",
        &[ix!("boosterClub"), ix!("contactEmail"), ix!("contributions")],
    ),
    CollectionSchema::auto("boosterClubs", &[uq!("name"), ix!("status")]),
    CollectionSchema::auto(
        "users",
        &[
            uq!("email"),
            ix!("role"),
            ix!("status"),
            ix!("boosterClub"),
            ix!("lastLogin"),
        ],
    ),
    CollectionSchema::natural("settings", "key", &[]),
    // Reporting and analytics
    CollectionSchema::auto(
        "adminLogs",
        &[
            ix!("timestamp"),
            ix!("user"),
            ix!("action"),
            ix!("severity"),
            ix!("ipAddress"),
            ix!("status"),
        ],
    ),
    CollectionSchema::auto(
        "userActivity",
        &[
            ix!("userId"),
            ix!("timestamp"),
            ix!("action"),
            ix!("page"),
            ix!("sessionId"),
        ],
    ),
    CollectionSchema::auto(
        "financialTransactions",
        &[
            uq!("transactionId"),
            ix!("date"),
            ix!("type"),
            ix!("amount"),
            ix!("status"),
            ix!("boosterClub"),
            ix!("paymentMethod"),
        ],
    ),
    CollectionSchema::auto(
        "reports",
        &[
            ix!("reportType"),
            ix!("generatedBy"),
            ix!("dateGenerated"),
            ix!("status"),
        ],
    ),
    CollectionSchema::auto(
        "analytics",
        &[
            ix!("metricName"),
            ix!("date"),
            ix!("boosterClub"),
            ix!("category"),
        ],
    ),
    // Events and activity tracking
    CollectionSchema::auto(
        "events",
        &[
            ix!("eventType"),
            ix!("date"),
            ix!("boosterClub"),
            ix!("status"),
            ix!("location"),
        ],
    ),
    CollectionSchema::auto(
        "eventRegistrations",
        &[
            ix!("eventId"),
            ix!("userId"),
            ix!("registrationDate"),
            ix!("status"),
        ],
    ),
    CollectionSchema::auto(
        "volunteerHours",
        &[
            ix!("volunteerId"),
            ix!("date"),
            ix!("boosterClub"),
            ix!("eventId"),
            ix!("status"),
        ],
    ),
    CollectionSchema::auto(
        "fundraisingEvents",
        &[
            ix!("eventName"),
            ix!("date"),
            ix!("boosterClub"),
            ix!("status"),
            ix!("goalAmount"),
        ],
    ),
    // Communication
    CollectionSchema::auto(
        "communications",
        &[
            ix!("type"),
            ix!("recipient"),
            ix!("dateSent"),
            ix!("status"),
            ix!("priority"),
        ],
    ),
    CollectionSchema::auto(
        "emailLogs",
        &[
            ix!("recipient"),
            ix!("dateSent"),
            ix!("status"),
            ix!("template"),
        ],
    ),
    CollectionSchema::auto(
        "notifications",
        &[
            ix!("userId"),
            ix!("type"),
            ix!("dateCreated"),
            ix!("read"),
            ix!("priority"),
        ],
    ),
    // Inventory and resources
    CollectionSchema::auto(
        "inventory",
        &[
            ix!("itemName"),
            ix!("category"),
            ix!("boosterClub"),
            ix!("status"),
            ix!("location"),
        ],
    ),
    CollectionSchema::auto(
        "equipment",
        &[
            ix!("equipmentName"),
            ix!("category"),
            ix!("boosterClub"),
            ix!("status"),
            ix!("lastMaintenance"),
        ],
    ),
    CollectionSchema::auto(
        "resources",
        &[ix!("resourceName"), ix!("type"), ix!("boosterClub"), ix!("status")],
    ),
    // Compliance and documentation
    CollectionSchema::auto(
        "complianceRecords",
        &[
            ix!("recordType"),
            ix!("boosterClub"),
            ix!("date"),
            ix!("status"),
            ix!("expiryDate"),
        ],
    ),
    CollectionSchema::auto(
        "documents",
        &[
            ix!("documentType"),
            ix!("boosterClub"),
            ix!("dateCreated"),
            ix!("status"),
            ix!("category"),
        ],
    ),
    CollectionSchema::auto(
        "taxRecords",
        &[
            ix!("taxYear"),
            ix!("recordType"),
            ix!("boosterClub"),
            ix!("date"),
            ix!("status"),
        ],
    ),
    // Performance and metrics
    CollectionSchema::auto(
        "performanceMetrics",
        &[
            ix!("metricName"),
            ix!("date"),
            ix!("boosterClub"),
            ix!("category"),
        ],
    ),
    CollectionSchema::auto(
        "goals",
        &[
            ix!("goalType"),
            ix!("boosterClub"),
            ix!("targetDate"),
            ix!("status"),
            ix!("priority"),
        ],
    ),
    CollectionSchema::auto(
        "achievements",
        &[
            ix!("achievementType"),
            ix!("boosterClub"),
            ix!("dateAchieved"),
            ix!("category"),
        ],
    ),
];
