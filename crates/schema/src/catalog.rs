//! Built-in collection catalog
//!
//! One spec per page of the staff desk. Payload keys follow what the
//! backend serializers accept, which is why some edit fields are named
//! differently from the columns they are prefilled from.

use crate::collection::{CollectionSpec, Endpoints};
use crate::column::{CellFormat, Column};
use crate::field::{FormField, WidgetType};
use sitedesk_core::{DeskError, DeskResult};

/// Fixed backend paths outside the collection convention
pub mod paths {
    /// GET, 403 when there is no session
    pub const CHECK_LOGIN: &str = "/api/check-login/";
    /// POST `{login, password}`
    pub const LOGIN: &str = "/api/login/";
    /// POST, ends the session
    pub const LOGOUT: &str = "/api/logout/";
    /// POST `{personnelNumber}`, opens today's work-time entry
    pub const WTT_START: &str = "/api/wtt/start/";
    /// POST `{personnelNumber}`, closes today's work-time entry
    pub const WTT_STOP: &str = "/api/wtt/stop/";
    /// Public application intake, same as the applications collection
    pub const APPLICATIONS: &str = "/api/applications/";
}

/// Catalog name of the work-time tracking collection
pub const WORK_TIME: &str = "work-time";

/// Catalog name of the client applications collection
pub const APPLICATIONS: &str = "applications";

// ============================================================================
// Catalog
// ============================================================================

/// Ordered set of collection specs
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    collections: Vec<CollectionSpec>,
}

impl Catalog {
    /// Build a catalog from explicit specs
    pub fn new(collections: Vec<CollectionSpec>) -> Self {
        Self { collections }
    }

    /// The staff desk's pages
    pub fn builtin() -> Self {
        Self::new(vec![
            applications(),
            application_types(),
            application_statuses(),
            employees(),
            job_titles(),
            materials(),
            objects(),
            roles(),
            users(),
            work_time(),
        ])
    }

    /// Find a collection by name
    pub fn get(&self, name: &str) -> DeskResult<&CollectionSpec> {
        self.collections
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| DeskError::UnknownCollection(name.to_string()))
    }

    /// Collection names in page order
    pub fn names(&self) -> Vec<&str> {
        self.collections.iter().map(|c| c.name.as_str()).collect()
    }

    /// Iterate over all specs
    pub fn iter(&self) -> impl Iterator<Item = &CollectionSpec> {
        self.collections.iter()
    }

    /// Number of collections
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Built-in specs
// ============================================================================

fn applications() -> CollectionSpec {
    CollectionSpec::new(
        APPLICATIONS,
        "Client Applications",
        Endpoints::rest("/api/applications/"),
        vec![
            Column::new("id", "ID"),
            Column::new("fullName", "Full name"),
            Column::new("phoneNumber", "Phone"),
            Column::new("description", "Description"),
            Column::nested("type", "Type", &["type", "name"]),
            Column::nested("status", "Status", &["status", "name"]),
            Column::new("date", "Date").with_format(CellFormat::Date),
        ],
    )
    .with_item_noun("an application")
    .with_references(&["application-types", "application-statuses"])
    .with_edit_form(vec![
        FormField::text("fullName", "Full name").prefilled(),
        FormField::text("phoneNumber", "Phone")
            .with_widget(WidgetType::Phone)
            .prefilled(),
        FormField::text("description", "Description")
            .with_widget(WidgetType::TextArea)
            .prefilled(),
        FormField::select("type_name", "Type", "application-types").prefilled_from("type"),
        FormField::select("status_name", "Status", "application-statuses")
            .prefilled_from("status"),
    ])
    .with_delete(&["fullName", "phoneNumber", "type"])
}

fn application_types() -> CollectionSpec {
    CollectionSpec::new(
        "application-types",
        "Application Types",
        Endpoints::rest("/api/application-types/"),
        vec![
            Column::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("description", "Description"),
        ],
    )
    .with_item_noun("an application type")
    .with_add_form(
        vec![
            FormField::text("name", "Name"),
            FormField::text("description", "Description").with_widget(WidgetType::TextArea),
        ],
        &["name", "description"],
    )
    .with_edit_form(vec![
        FormField::text("name", "Name").prefilled(),
        FormField::text("description", "Description")
            .with_widget(WidgetType::TextArea)
            .prefilled(),
    ])
    .with_delete(&["name", "description"])
}

fn application_statuses() -> CollectionSpec {
    CollectionSpec::new(
        "application-statuses",
        "Application Statuses",
        Endpoints::rest("/api/application-statuses/"),
        vec![
            Column::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("description", "Description"),
        ],
    )
}

fn employees() -> CollectionSpec {
    let text_fields = |prefill: bool| {
        [
            ("fullName", "Full name", WidgetType::Text),
            ("personnelNumber", "Personnel number", WidgetType::Text),
            ("phoneNumber", "Phone", WidgetType::Phone),
            ("email", "Email", WidgetType::Email),
            ("bankDetails", "Bank details", WidgetType::TextArea),
            ("passport", "Passport", WidgetType::TextArea),
        ]
        .into_iter()
        .map(move |(key, label, widget)| {
            let field = FormField::new(key, label, widget);
            if prefill { field.prefilled() } else { field }
        })
        .collect::<Vec<_>>()
    };

    let mut add_form = text_fields(false);
    add_form.extend([
        FormField::select("jobTitle", "Job title", "job-titles"),
        FormField::select("object", "Object", "objects"),
        FormField::select("user", "User", "users"),
    ]);

    let mut edit_form = text_fields(true);
    edit_form.extend([
        FormField::select("jobTitle", "Job title", "job-titles").prefilled(),
        FormField::select("object", "Object", "objects").prefilled(),
        FormField::select("user", "User", "users").prefilled(),
    ]);

    CollectionSpec::new(
        "employees",
        "Employees",
        Endpoints::rest("/api/employees/"),
        vec![
            Column::new("id", "ID"),
            Column::new("fullName", "Full name"),
            Column::new("personnelNumber", "Personnel number"),
            Column::new("phoneNumber", "Phone"),
            Column::new("email", "Email"),
            Column::new("bankDetails", "Bank details"),
            Column::new("passport", "Passport"),
            Column::new("jobTitle", "Job title"),
            Column::new("object", "Object"),
            Column::new("user", "User"),
        ],
    )
    .with_item_noun("an employee")
    .with_references(&["job-titles", "objects", "users"])
    .with_add_form(add_form, &["fullName"])
    .with_edit_form(edit_form)
    .with_delete(&["fullName", "personnelNumber", "phoneNumber"])
}

fn job_titles() -> CollectionSpec {
    CollectionSpec::new(
        "job-titles",
        "Job Titles",
        Endpoints::rest("/api/job-titles/"),
        vec![Column::new("id", "ID"), Column::new("name", "Name")],
    )
    .with_item_noun("a job title")
    .with_add_form(vec![FormField::text("name", "Name")], &["name"])
    .with_edit_form(vec![FormField::text("name", "Name").prefilled()])
    .with_delete(&["name"])
}

fn materials() -> CollectionSpec {
    CollectionSpec::new(
        "materials",
        "Materials",
        Endpoints::rest("/api/materials/"),
        vec![
            Column::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("amount", "Amount"),
            Column::new("object", "Object"),
        ],
    )
    .with_item_noun("a material")
    .with_references(&["objects"])
    .with_add_form(
        vec![
            FormField::text("name", "Name"),
            FormField::text("amount", "Amount").with_widget(WidgetType::Number),
            FormField::select("object", "Object", "objects"),
        ],
        &["name"],
    )
    .with_edit_form(vec![
        FormField::text("name", "Name").prefilled(),
        FormField::text("amount", "Amount")
            .with_widget(WidgetType::Number)
            .prefilled(),
    ])
    .with_delete(&["name", "amount"])
}

fn objects() -> CollectionSpec {
    CollectionSpec::new(
        "objects",
        "Objects",
        Endpoints::rest("/api/objects/"),
        vec![
            Column::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("address", "Address"),
            Column::new("description", "Description"),
        ],
    )
}

fn roles() -> CollectionSpec {
    CollectionSpec::new(
        "roles",
        "Roles",
        Endpoints::rest("/api/roles/"),
        vec![
            Column::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("description", "Description"),
        ],
    )
}

/// Users reset a `name` field after a create although the add form has
/// none; the validator reports it and the reset is a no-op.
fn users() -> CollectionSpec {
    CollectionSpec::new(
        "users",
        "Users",
        Endpoints::rest("/api/users/"),
        vec![
            Column::new("id", "ID"),
            Column::new("login", "Login"),
            Column::masked("password", "Password", 8),
            Column::new("role", "Role"),
        ],
    )
    .with_item_noun("a user")
    .with_references(&["roles"])
    .with_add_form(
        vec![
            FormField::text("login", "Login"),
            FormField::text("password", "Password").with_widget(WidgetType::Password),
            FormField::select("role", "Role", "roles"),
        ],
        &["name"],
    )
    .with_edit_form(vec![
        FormField::text("login", "Login").prefilled(),
        FormField::text("password", "Password")
            .with_widget(WidgetType::Password)
            .prefilled(),
        FormField::select("role", "Role", "roles").prefilled(),
    ])
    .with_delete(&["login", "role"])
}

fn work_time() -> CollectionSpec {
    CollectionSpec::new(
        WORK_TIME,
        "Work Time",
        Endpoints::rest("/api/wtt/")
            .with_list("/api/wtt/listWTT/")
            .with_update("/api/wtt/updateWTT/"),
        vec![
            Column::new("id", "ID"),
            Column::nested(
                "personnelNumber",
                "Personnel number",
                &["employee", "personnelNumber"],
            ),
            Column::new("date", "Date"),
            Column::new("startTime", "Start").with_format(CellFormat::TimePrefix(8)),
            Column::new("endTime", "End").with_format(CellFormat::TimePrefix(8)),
        ],
    )
    .with_item_noun("a time entry")
    .with_edit_form(vec![
        FormField::text("personnelNumber", "Personnel number").prefilled(),
        FormField::text("startTime", "Start")
            .with_widget(WidgetType::Time)
            .prefilled(),
        FormField::text("endTime", "End")
            .with_widget(WidgetType::Time)
            .prefilled(),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ValidationWarningCode, Validator};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_names() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.names(),
            vec![
                "applications",
                "application-types",
                "application-statuses",
                "employees",
                "job-titles",
                "materials",
                "objects",
                "roles",
                "users",
                "work-time",
            ]
        );
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_unknown_collection() {
        let err = Catalog::builtin().get("invoices").unwrap_err();
        assert!(matches!(err, DeskError::UnknownCollection(name) if name == "invoices"));
    }

    #[test]
    fn test_builtin_catalog_has_no_errors() {
        let result = Validator::with_default_rules().validate_catalog(&Catalog::builtin());
        assert!(result.valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn test_users_reset_defect_is_flagged() {
        let result = Validator::with_default_rules().validate_catalog(&Catalog::builtin());
        let flagged: Vec<_> = result
            .warnings
            .iter()
            .filter(|w| w.code == ValidationWarningCode::ResetFieldMissing)
            .filter_map(|w| w.path.as_deref())
            .collect();
        assert_eq!(flagged, vec!["users.reset_after_add"]);
    }

    #[test]
    fn test_read_only_pages() {
        let catalog = Catalog::builtin();
        for name in ["objects", "roles", "application-statuses"] {
            assert!(catalog.get(name).unwrap().capabilities.is_read_only());
        }
    }

    #[test]
    fn test_applications_edit_payload_keys() {
        let catalog = Catalog::builtin();
        let spec = catalog.get(APPLICATIONS).unwrap();
        let keys: Vec<_> = spec.edit_form.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["fullName", "phoneNumber", "description", "type_name", "status_name"]
        );
        assert!(!spec.capabilities.add);
    }

    #[test]
    fn test_work_time_endpoints() {
        let catalog = Catalog::builtin();
        let spec = catalog.get(WORK_TIME).unwrap();
        assert_eq!(spec.endpoints.list_path(), "/api/wtt/listWTT/");
        assert_eq!(
            spec.endpoints.update_path(&"3".into()),
            "/api/wtt/updateWTT/"
        );
        assert!(spec.capabilities.edit);
        assert!(!spec.capabilities.delete);
    }
}
