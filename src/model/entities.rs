//! The booster-club entity table.
//!
//! Lookup-by-field queries take their argument under the field's own name,
//! e.g. `by_tier` reads `{"tier": ...}`. Date ranges read `start` and `end`
//! (inclusive), `recent` reads an optional `limit`.

use super::{EntitySpec, FieldDefault, LimitArg, Literal, NamedQuery, QueryArg, QueryTerm};
use crate::query::{Direction, Operator};

type FieldEntry = (&'static str, FieldDefault);

const CREATED: FieldEntry = ("createdAt", FieldDefault::Now);
const UPDATED: FieldEntry = ("updatedAt", FieldDefault::Now);

macro_rules! by {
    ($name:literal, $field:literal) => {
        NamedQuery {
            name: $name,
            terms: &[QueryTerm {
                field: $field,
                operator: Operator::Eq,
                arg: QueryArg::Param($field),
            }],
            sort: None,
            limit: None,
        }
    };
}

macro_rules! fixed {
    ($name:literal, $field:literal, $value:expr) => {
        NamedQuery {
            name: $name,
            terms: &[QueryTerm {
                field: $field,
                operator: Operator::Eq,
                arg: QueryArg::Fixed($value),
            }],
            sort: None,
            limit: None,
        }
    };
}

macro_rules! date_range {
    ($field:literal) => {
        NamedQuery {
            name: "by_date_range",
            terms: &[
                QueryTerm {
                    field: $field,
                    operator: Operator::Gte,
                    arg: QueryArg::Param("start"),
                },
                QueryTerm {
                    field: $field,
                    operator: Operator::Lte,
                    arg: QueryArg::Param("end"),
                },
            ],
            sort: None,
            limit: None,
        }
    };
}

macro_rules! recent {
    ($field:literal, $limit:literal) => {
        NamedQuery {
            name: "recent",
            terms: &[],
            sort: Some(($field, Direction::Desc)),
            limit: Some(LimitArg {
                param: "limit",
                default: $limit,
            }),
        }
    };
}

macro_rules! upcoming {
    ($field:literal) => {
        NamedQuery {
            name: "upcoming",
            terms: &[QueryTerm {
                field: $field,
                operator: Operator::Gte,
                arg: QueryArg::Today,
            }],
            sort: None,
            limit: None,
        }
    };
}

// Membership and organization

pub static MEMBERS: EntitySpec = EntitySpec {
    collection: "members",
    defaults: &[
        ("joinDate", FieldDefault::Now),
        ("status", FieldDefault::Text("active")),
        CREATED,
        UPDATED,
    ],
    queries: &[
        by!("by_email", "email"),
        by!("by_tier", "tier"),
        fixed!("active", "status", Literal::Text("active")),
        NamedQuery {
            name: "search",
            terms: &[QueryTerm {
                field: "name",
                operator: Operator::Contains,
                arg: QueryArg::Param("term"),
            }],
            sort: None,
            limit: None,
        },
    ],
};

pub static DONATIONS: EntitySpec = EntitySpec {
    collection: "donations",
    defaults: &[
        ("date", FieldDefault::Now),
        ("status", FieldDefault::Text("pending")),
        CREATED,
        UPDATED,
    ],
    queries: &[
        by!("by_donor", "donorEmail"),
        by!("by_tier", "tier"),
        by!("by_status", "status"),
        date_range!("date"),
    ],
};

pub static VENDORS: EntitySpec = EntitySpec {
    collection: "vendors",
    defaults: &[CREATED, UPDATED],
    queries: &[
        by!("by_tax_id", "taxId"),
        by!("by_booster_club", "boosterClub"),
    ],
};

pub static INSURANCE: EntitySpec = EntitySpec {
    collection: "insurance",
    defaults: &[CREATED, UPDATED],
    queries: &[by!("by_booster_club", "boosterClub")],
};

pub static BOOSTER_CLUBS: EntitySpec = EntitySpec {
    collection: "boosterClubs",
    defaults: &[("status", FieldDefault::Text("active")), CREATED, UPDATED],
    queries: &[
        by!("by_name", "name"),
        fixed!("active", "status", Literal::Text("active")),
    ],
};

pub static USERS: EntitySpec = EntitySpec {
    collection: "users",
    defaults: &[("status", FieldDefault::Text("active")), CREATED, UPDATED],
    queries: &[
        by!("by_email", "email"),
        by!("by_role", "role"),
        by!("by_booster_club", "boosterClub"),
        fixed!("active", "status", Literal::Text("active")),
    ],
};

// Reporting and analytics

pub static ADMIN_LOGS: EntitySpec = EntitySpec {
    collection: "adminLogs",
    defaults: &[("timestamp", FieldDefault::Now), CREATED],
    queries: &[
        by!("by_user", "user"),
        by!("by_action", "action"),
        date_range!("timestamp"),
        recent!("timestamp", 100),
    ],
};

pub static USER_ACTIVITY: EntitySpec = EntitySpec {
    collection: "userActivity",
    defaults: &[
        ("timestamp", FieldDefault::Now),
        ("sessionId", FieldDefault::GeneratedId("session")),
        CREATED,
    ],
    queries: &[
        by!("by_user", "userId"),
        by!("by_session", "sessionId"),
        by!("by_page", "page"),
        date_range!("timestamp"),
    ],
};

pub static FINANCIAL_TRANSACTIONS: EntitySpec = EntitySpec {
    collection: "financialTransactions",
    defaults: &[
        ("transactionId", FieldDefault::GeneratedId("txn")),
        ("date", FieldDefault::Now),
        CREATED,
    ],
    queries: &[
        by!("by_transaction_id", "transactionId"),
        by!("by_type", "type"),
        date_range!("date"),
    ],
};

pub static REPORTS: EntitySpec = EntitySpec {
    collection: "reports",
    defaults: &[
        ("dateGenerated", FieldDefault::Now),
        ("status", FieldDefault::Text("generated")),
        CREATED,
    ],
    queries: &[
        by!("by_type", "reportType"),
        by!("by_user", "generatedBy"),
        recent!("dateGenerated", 50),
    ],
};

pub static ANALYTICS: EntitySpec = EntitySpec {
    collection: "analytics",
    defaults: &[("date", FieldDefault::Now), CREATED],
    queries: &[
        by!("by_metric", "metricName"),
        by!("by_category", "category"),
        by!("by_date", "date"),
        date_range!("date"),
    ],
};

// Events and activities

pub static EVENTS: EntitySpec = EntitySpec {
    collection: "events",
    defaults: &[CREATED],
    queries: &[
        by!("by_type", "eventType"),
        date_range!("date"),
        upcoming!("date"),
    ],
};

pub static EVENT_REGISTRATIONS: EntitySpec = EntitySpec {
    collection: "eventRegistrations",
    defaults: &[
        ("registrationDate", FieldDefault::Now),
        ("status", FieldDefault::Text("registered")),
        CREATED,
    ],
    queries: &[
        by!("by_event", "eventId"),
        by!("by_user", "userId"),
        by!("by_status", "status"),
    ],
};

pub static VOLUNTEER_HOURS: EntitySpec = EntitySpec {
    collection: "volunteerHours",
    defaults: &[CREATED],
    queries: &[
        by!("by_volunteer", "volunteerId"),
        by!("by_event", "eventId"),
        date_range!("date"),
    ],
};

pub static FUNDRAISING_EVENTS: EntitySpec = EntitySpec {
    collection: "fundraisingEvents",
    defaults: &[CREATED],
    queries: &[
        by!("by_booster_club", "boosterClub"),
        by!("by_status", "status"),
        upcoming!("date"),
    ],
};

// Communication

pub static COMMUNICATIONS: EntitySpec = EntitySpec {
    collection: "communications",
    defaults: &[
        ("dateSent", FieldDefault::Now),
        ("status", FieldDefault::Text("sent")),
        CREATED,
    ],
    queries: &[
        by!("by_type", "type"),
        by!("by_recipient", "recipient"),
        date_range!("dateSent"),
    ],
};

pub static EMAIL_LOGS: EntitySpec = EntitySpec {
    collection: "emailLogs",
    defaults: &[("dateSent", FieldDefault::Now), CREATED],
    queries: &[
        by!("by_recipient", "recipient"),
        by!("by_template", "template"),
        by!("by_status", "status"),
    ],
};

pub static NOTIFICATIONS: EntitySpec = EntitySpec {
    collection: "notifications",
    defaults: &[
        ("dateCreated", FieldDefault::Now),
        ("read", FieldDefault::Flag(false)),
        CREATED,
    ],
    queries: &[
        by!("by_user", "userId"),
        NamedQuery {
            name: "unread",
            terms: &[
                QueryTerm {
                    field: "userId",
                    operator: Operator::Eq,
                    arg: QueryArg::Param("userId"),
                },
                QueryTerm {
                    field: "read",
                    operator: Operator::Eq,
                    arg: QueryArg::Fixed(Literal::Flag(false)),
                },
            ],
            sort: None,
            limit: None,
        },
    ],
};

// Inventory and resources

pub static INVENTORY: EntitySpec = EntitySpec {
    collection: "inventory",
    defaults: &[CREATED],
    queries: &[
        by!("by_category", "category"),
        by!("by_booster_club", "boosterClub"),
        NamedQuery {
            name: "low_stock",
            terms: &[QueryTerm {
                field: "quantity",
                operator: Operator::Lte,
                arg: QueryArg::ParamOr("threshold", Literal::Int(10)),
            }],
            sort: None,
            limit: None,
        },
    ],
};

pub static EQUIPMENT: EntitySpec = EntitySpec {
    collection: "equipment",
    defaults: &[CREATED],
    queries: &[
        by!("by_category", "category"),
        by!("by_booster_club", "boosterClub"),
        NamedQuery {
            name: "needs_maintenance",
            terms: &[QueryTerm {
                field: "lastMaintenance",
                operator: Operator::Lte,
                arg: QueryArg::Today,
            }],
            sort: None,
            limit: None,
        },
    ],
};

pub static RESOURCES: EntitySpec = EntitySpec {
    collection: "resources",
    defaults: &[CREATED],
    queries: &[
        by!("by_type", "type"),
        by!("by_booster_club", "boosterClub"),
        by!("by_status", "status"),
    ],
};

// Compliance and documentation

pub static COMPLIANCE_RECORDS: EntitySpec = EntitySpec {
    collection: "complianceRecords",
    defaults: &[CREATED],
    queries: &[
        by!("by_type", "recordType"),
        by!("by_booster_club", "boosterClub"),
        NamedQuery {
            name: "expiring_soon",
            terms: &[QueryTerm {
                field: "expiryDate",
                operator: Operator::Lte,
                arg: QueryArg::DaysFromNow {
                    param: "days",
                    default: 30,
                },
            }],
            sort: None,
            limit: None,
        },
    ],
};

pub static DOCUMENTS: EntitySpec = EntitySpec {
    collection: "documents",
    defaults: &[("dateCreated", FieldDefault::Now), CREATED],
    queries: &[
        by!("by_type", "documentType"),
        by!("by_booster_club", "boosterClub"),
        by!("by_category", "category"),
    ],
};

pub static TAX_RECORDS: EntitySpec = EntitySpec {
    collection: "taxRecords",
    defaults: &[CREATED],
    queries: &[
        by!("by_tax_year", "taxYear"),
        by!("by_type", "recordType"),
        by!("by_booster_club", "boosterClub"),
    ],
};

// Performance tracking

pub static PERFORMANCE_METRICS: EntitySpec = EntitySpec {
    collection: "performanceMetrics",
    defaults: &[("date", FieldDefault::Now), CREATED],
    queries: &[
        by!("by_metric", "metricName"),
        by!("by_category", "category"),
        date_range!("date"),
    ],
};

pub static GOALS: EntitySpec = EntitySpec {
    collection: "goals",
    defaults: &[CREATED],
    queries: &[
        by!("by_type", "goalType"),
        by!("by_booster_club", "boosterClub"),
        by!("by_status", "status"),
    ],
};

pub static ACHIEVEMENTS: EntitySpec = EntitySpec {
    collection: "achievements",
    defaults: &[("dateAchieved", FieldDefault::Now), CREATED],
    queries: &[
        by!("by_type", "achievementType"),
        by!("by_booster_club", "boosterClub"),
        by!("by_category", "category"),
        recent!("dateAchieved", 20),
    ],
};

/// Every declared entity, in schema order.
pub static ALL: &[&EntitySpec] = &[
    &MEMBERS,
    &DONATIONS,
    &VENDORS,
    &INSURANCE,
    &BOOSTER_CLUBS,
    &USERS,
    &ADMIN_LOGS,
    &USER_ACTIVITY,
    &FINANCIAL_TRANSACTIONS,
    &REPORTS,
    &ANALYTICS,
    &EVENTS,
    &EVENT_REGISTRATIONS,
    &VOLUNTEER_HOURS,
    &FUNDRAISING_EVENTS,
    &COMMUNICATIONS,
    &EMAIL_LOGS,
    &NOTIFICATIONS,
    &INVENTORY,
    &EQUIPMENT,
    &RESOURCES,
    &COMPLIANCE_RECORDS,
    &DOCUMENTS,
    &TAX_RECORDS,
    &PERFORMANCE_METRICS,
    &GOALS,
    &ACHIEVEMENTS,
];

/// Entity stored in `collection`, if one is declared.
pub fn find(collection: &str) -> Option<&'static EntitySpec> {
    ALL.iter().copied().find(|spec| spec.collection == collection)
}
