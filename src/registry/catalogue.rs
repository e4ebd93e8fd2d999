//! Builtin column catalogue for every entity kind.

use super::ValueKind::{Count, Integer, Text, Timestamp};
use super::{ColumnDecl, DisplayRule, EntityDecl};
use crate::types::EntityKind;

const CREATED_BY: &str = "billingItem.orderItem.order.userRecord.username";

const VOLUME_COLUMNS: &[ColumnDecl] = &[
    ColumnDecl::new("id", "id", Integer, "ID"),
    ColumnDecl::new("username", "username", Text, "Username"),
    ColumnDecl::new("datacenter", "serviceResource.datacenter.name", Text, "Datacenter"),
    ColumnDecl::new("capacity_gb", "capacityGb", Integer, "Capacity (GB)"),
    ColumnDecl::new("storage_type", "storageType.keyName", Text, "Storage Type")
        .display(DisplayRule::Lowercase),
    ColumnDecl::new("bytes_used", "bytesUsed", Integer, "Bytes Used"),
    ColumnDecl::new("IOPs", "iops", Text, "IOPs"),
    ColumnDecl::new("ip_addr", "serviceResourceBackendIpAddress", Text, "IP Address"),
    ColumnDecl::new("lunId", "lunId", Integer, "LUN ID"),
    ColumnDecl::new("active_transactions", "activeTransactionCount", Integer, "Active Transactions"),
    ColumnDecl::new("rep_partner_count", "replicationPartnerCount", Integer, "Replication Partners"),
    ColumnDecl::new("created_by", CREATED_BY, Text, "Created By"),
    ColumnDecl::new("notes", "notes", Text, "Notes"),
    ColumnDecl::new("mount_addr", "fileNetworkMountAddress", Text, "Mount Address"),
];

const SNAPSHOT_COLUMNS: &[ColumnDecl] = &[
    ColumnDecl::new("id", "id", Integer, "ID"),
    ColumnDecl::new("name", "username", Text, "Name"),
    ColumnDecl::new("created", "snapshotCreationTimestamp", Timestamp, "Created"),
    ColumnDecl::new("size_bytes", "snapshotSizeBytes", Integer, "Size (Bytes)"),
    ColumnDecl::new("notes", "notes", Text, "Notes"),
];

const ACCESS_HOST_COLUMNS: &[ColumnDecl] = &[
    ColumnDecl::new("id", "id", Integer, "ID"),
    ColumnDecl::new("name", "fullyQualifiedDomainName", Text, "Name"),
    ColumnDecl::new("type", "type", Text, "Type"),
    ColumnDecl::new("private_ip_address", "primaryBackendIpAddress", Text, "Private IP Address"),
    ColumnDecl::new("source_subnet", "allowedHost.sourceSubnet", Text, "Source Subnet"),
    ColumnDecl::new("host_iqn", "allowedHost.name", Text, "Host IQN"),
    ColumnDecl::new("username", "allowedHost.credential.username", Text, "Username"),
    ColumnDecl::new("password", "allowedHost.credential.password", Text, "Password"),
    ColumnDecl::new("allowed_host_id", "allowedHost.id", Integer, "Allowed Host ID"),
];

const ACCESS_HOST_NAMES: &[&str] = &[
    "id",
    "name",
    "type",
    "private_ip_address",
    "source_subnet",
    "host_iqn",
    "username",
    "password",
    "allowed_host_id",
];

const SUBNET_COLUMNS: &[ColumnDecl] = &[
    ColumnDecl::new("id", "id", Integer, "ID"),
    ColumnDecl::new("identifier", "networkIdentifier", Text, "Identifier"),
    ColumnDecl::new("type", "subnetType", Text, "Type"),
    ColumnDecl::new("network_space", "networkVlan.networkSpace", Text, "Network Space"),
    ColumnDecl::new("datacenter", "datacenter.name", Text, "Datacenter"),
    ColumnDecl::new("vlan_id", "networkVlan.id", Integer, "VLAN ID"),
    ColumnDecl::new("IPs", "ipAddressCount", Integer, "IPs"),
    ColumnDecl::new("hardware", "hardware", Count, "Hardware"),
    ColumnDecl::new("virtual_servers", "virtualGuests", Count, "Virtual Servers"),
];

const SUBNET_NAMES: &[&str] = &[
    "id",
    "identifier",
    "type",
    "network_space",
    "datacenter",
    "vlan_id",
    "IPs",
    "hardware",
    "virtual_servers",
];

const HARDWARE_COLUMNS: &[ColumnDecl] = &[
    ColumnDecl::new("id", "id", Integer, "ID"),
    ColumnDecl::new("hostname", "hostname", Text, "Hostname"),
    ColumnDecl::new("domain", "domain", Text, "Domain"),
    ColumnDecl::new("public_ip", "primaryIpAddress", Text, "Public IP"),
    ColumnDecl::new("private_ip", "primaryBackendIpAddress", Text, "Private IP"),
    ColumnDecl::new("datacenter", "datacenter.name", Text, "Datacenter"),
    ColumnDecl::new("status", "hardwareStatus.status", Text, "Status"),
    ColumnDecl::new("guid", "globalIdentifier", Text, "GUID"),
    ColumnDecl::new("cpu", "processorPhysicalCoreAmount", Integer, "CPU"),
    ColumnDecl::new("memory", "memoryCapacity", Integer, "Memory"),
    ColumnDecl::new(
        "os",
        "operatingSystem.softwareLicense.softwareDescription.name",
        Text,
        "OS",
    ),
    ColumnDecl::new("ipmi_ip", "networkManagementIpAddress", Text, "IPMI IP"),
    ColumnDecl::new("created", "provisionDate", Timestamp, "Created"),
    ColumnDecl::new("created_by", CREATED_BY, Text, "Created By"),
    ColumnDecl::new("tags", "tagReferences", Text, "Tags")
        .display(DisplayRule::JoinNames("tag.name")),
];

const USER_COLUMNS: &[ColumnDecl] = &[
    ColumnDecl::new("id", "id", Integer, "ID"),
    ColumnDecl::new("username", "username", Text, "Username"),
    ColumnDecl::new("email", "email", Text, "Email"),
    ColumnDecl::new("displayName", "displayName", Text, "Display Name"),
    ColumnDecl::new("2FA", "externalBindingCount", Integer, "2FA"),
    ColumnDecl::new("classicAPIKey", "apiAuthenticationKeyCount", Integer, "Classic API Key"),
    ColumnDecl::new("status", "userStatus.name", Text, "Status"),
    ColumnDecl::new("hardwareCount", "hardwareCount", Integer, "Hardware Count"),
    ColumnDecl::new("virtualGuestCount", "virtualGuestCount", Integer, "Virtual Guest Count"),
];

/// Shared by virtual servers and dedicated host guests.
const GUEST_COLUMNS: &[ColumnDecl] = &[
    ColumnDecl::new("id", "id", Integer, "ID"),
    ColumnDecl::new("hostname", "hostname", Text, "Hostname"),
    ColumnDecl::new("domain", "domain", Text, "Domain"),
    ColumnDecl::new("cpu", "maxCpu", Integer, "CPU"),
    ColumnDecl::new("memory", "maxMemory", Integer, "Memory"),
    ColumnDecl::new("public_ip", "primaryIpAddress", Text, "Public IP"),
    ColumnDecl::new("private_ip", "primaryBackendIpAddress", Text, "Private IP"),
    ColumnDecl::new("datacenter", "datacenter.name", Text, "Datacenter"),
    ColumnDecl::new("action", "activeTransaction.transactionStatus.name", Text, "Action"),
    ColumnDecl::new("guid", "globalIdentifier", Text, "GUID"),
    ColumnDecl::new("power_state", "powerState.name", Text, "Power State"),
    ColumnDecl::new("created_by", CREATED_BY, Text, "Created By"),
    ColumnDecl::new("tags", "tagReferences", Text, "Tags")
        .display(DisplayRule::JoinNames("tag.name")),
];

const GUEST_DEFAULTS: &[&str] = &[
    "id",
    "hostname",
    "domain",
    "cpu",
    "memory",
    "public_ip",
    "private_ip",
    "datacenter",
    "action",
];

const GUEST_OPTIONAL: &[&str] = &["guid", "power_state", "created_by", "tags"];

const GUEST_SORTABLE: &[&str] = &[
    "id",
    "hostname",
    "domain",
    "cpu",
    "memory",
    "public_ip",
    "private_ip",
    "datacenter",
];

/// Static declaration for `kind`.
pub fn builtin_decl(kind: EntityKind) -> EntityDecl {
    match kind {
        EntityKind::Volume => EntityDecl {
            kind,
            columns: VOLUME_COLUMNS,
            defaults: &["id", "username", "datacenter", "capacity_gb"],
            optional: &[
                "storage_type",
                "bytes_used",
                "IOPs",
                "ip_addr",
                "lunId",
                "active_transactions",
                "rep_partner_count",
                "created_by",
                "notes",
            ],
            sortable: &[
                "id",
                "username",
                "datacenter",
                "storage_type",
                "capacity_gb",
                "bytes_used",
                "ip_addr",
                "lunId",
                "active_transactions",
                "created_by",
                "mount_addr",
            ],
            default_sort: Some("id"),
        },
        EntityKind::Snapshot => EntityDecl {
            kind,
            columns: SNAPSHOT_COLUMNS,
            defaults: &["id", "name", "created", "size_bytes"],
            optional: &["notes"],
            sortable: &["id", "name", "created", "size_bytes"],
            default_sort: None,
        },
        EntityKind::AccessHost => EntityDecl {
            kind,
            columns: ACCESS_HOST_COLUMNS,
            defaults: ACCESS_HOST_NAMES,
            optional: &[],
            sortable: ACCESS_HOST_NAMES,
            default_sort: Some("allowed_host_id"),
        },
        EntityKind::Subnet => EntityDecl {
            kind,
            columns: SUBNET_COLUMNS,
            defaults: SUBNET_NAMES,
            optional: &[],
            sortable: SUBNET_NAMES,
            default_sort: Some("id"),
        },
        EntityKind::Hardware => EntityDecl {
            kind,
            columns: HARDWARE_COLUMNS,
            defaults: &[
                "id",
                "hostname",
                "domain",
                "public_ip",
                "private_ip",
                "datacenter",
                "status",
            ],
            optional: &[
                "guid",
                "cpu",
                "memory",
                "os",
                "ipmi_ip",
                "created",
                "created_by",
                "tags",
            ],
            sortable: &[
                "id",
                "guid",
                "hostname",
                "domain",
                "public_ip",
                "private_ip",
                "cpu",
                "memory",
                "os",
                "datacenter",
                "status",
                "ipmi_ip",
                "created",
                "created_by",
            ],
            default_sort: Some("hostname"),
        },
        EntityKind::User => EntityDecl {
            kind,
            columns: USER_COLUMNS,
            defaults: &["id", "username", "email", "displayName", "2FA", "classicAPIKey"],
            optional: &["status", "hardwareCount", "virtualGuestCount"],
            sortable: &["id", "username", "email", "displayName"],
            default_sort: None,
        },
        EntityKind::VirtualServer => EntityDecl {
            kind,
            columns: GUEST_COLUMNS,
            defaults: GUEST_DEFAULTS,
            optional: GUEST_OPTIONAL,
            sortable: GUEST_SORTABLE,
            default_sort: Some("hostname"),
        },
        EntityKind::HostGuest => EntityDecl {
            kind,
            columns: GUEST_COLUMNS,
            defaults: GUEST_DEFAULTS,
            optional: GUEST_OPTIONAL,
            sortable: GUEST_SORTABLE,
            default_sort: Some("id"),
        },
    }
}
