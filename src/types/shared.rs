//! Shapes used across clusters, job flows and instance groups.

use std::collections::BTreeMap;

use crate::traits::Validate;
use crate::validation::{Checker, XML_STRING_MAX_LEN, XML_STRING_MAX_LEN_256};

model! {
    /// An application installed on a cluster, e.g. Hive or Spark.
    pub struct Application => ApplicationBuilder {
        name => Name: String,
        version => Version: String,
        /// Arguments passed to the application at install time.
        args, set_args => Args: Vec<String>,
        /// Free-form metadata for third-party applications.
        additional_info, set_additional_info => AdditionalInfo: BTreeMap<String, String>,
    }
}

model! {
    /// A user-defined label attached to a cluster.
    pub struct Tag => TagBuilder {
        key => Key: String,
        value => Value: String,
    }
}

model! {
    /// A configuration classification with its properties and nested
    /// classifications, e.g. `hadoop-env` containing `export`.
    pub struct Configuration => ConfigurationBuilder {
        classification => Classification: String,
        configurations, set_configurations => Configurations: Vec<Configuration> [schema(no_recursion)],
        properties, set_properties => Properties: BTreeMap<String, String>,
    }
}

model! {
    /// A property passed to a step's main function.
    pub struct KeyValue => KeyValueBuilder {
        key => Key: String,
        value => Value: String,
    }
}

model! {
    /// A third-party product with its install arguments.
    pub struct SupportedProductConfig => SupportedProductConfigBuilder {
        name => Name: String,
        args, set_args => Args: Vec<String>,
    }
}

model! {
    /// Kerberos settings of a cluster that uses a security configuration.
    pub struct KerberosAttributes => KerberosAttributesBuilder {
        realm => Realm: String,
        kdc_admin_password => KdcAdminPassword: String,
        cross_realm_trust_principal_password => CrossRealmTrustPrincipalPassword: String,
        ad_domain_join_user => ADDomainJoinUser: String [serde(rename = "ADDomainJoinUser")],
        ad_domain_join_password => ADDomainJoinPassword: String [serde(rename = "ADDomainJoinPassword")],
    }
}

model! {
    /// Where a cluster's instances are launched.
    pub struct PlacementType => PlacementTypeBuilder {
        availability_zone => AvailabilityZone: String,
        /// Used with instance fleets in place of `AvailabilityZone`.
        availability_zones, set_availability_zones => AvailabilityZones: Vec<String>,
    }
}

impl Validate for Application {
    fn check(&self, _checker: &mut Checker<'_>) {}
}

impl Validate for Tag {
    fn check(&self, _checker: &mut Checker<'_>) {}
}

impl Validate for Configuration {
    fn check(&self, checker: &mut Checker<'_>) {
        checker.each("Configurations", self.configurations());
    }
}

impl Validate for KeyValue {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .xml_string("Key", self.key(), XML_STRING_MAX_LEN)
            .xml_string("Value", self.value(), XML_STRING_MAX_LEN);
    }
}

impl Validate for SupportedProductConfig {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .xml_string("Name", self.name(), XML_STRING_MAX_LEN_256)
            .each_xml_string("Args", self.args(), XML_STRING_MAX_LEN);
    }
}

impl Validate for KerberosAttributes {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("Realm", self.realm())
            .xml_string("Realm", self.realm(), XML_STRING_MAX_LEN_256)
            .required("KdcAdminPassword", self.kdc_admin_password())
            .xml_string(
                "KdcAdminPassword",
                self.kdc_admin_password(),
                XML_STRING_MAX_LEN_256,
            )
            .xml_string(
                "CrossRealmTrustPrincipalPassword",
                self.cross_realm_trust_principal_password(),
                XML_STRING_MAX_LEN_256,
            )
            .xml_string(
                "ADDomainJoinUser",
                self.ad_domain_join_user(),
                XML_STRING_MAX_LEN_256,
            )
            .xml_string(
                "ADDomainJoinPassword",
                self.ad_domain_join_password(),
                XML_STRING_MAX_LEN_256,
            );
    }
}

impl Validate for PlacementType {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .xml_string("AvailabilityZone", self.availability_zone(), XML_STRING_MAX_LEN)
            .each_xml_string(
                "AvailabilityZones",
                self.availability_zones(),
                XML_STRING_MAX_LEN_256,
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_json_snapshot;

    #[test]
    fn test_application_display() {
        let app = Application::builder()
            .name("Spark")
            .args("--verbose")
            .args("--fast")
            .additional_info("b", "2")
            .additional_info("a", "1")
            .build();
        assert_eq!(
            app.to_string(),
            "{Name: Spark,Args: [--verbose, --fast],AdditionalInfo: {a=1, b=2}}"
        );
    }

    #[test]
    fn test_nested_configurations() {
        let config = Configuration::builder()
            .classification("hadoop-env")
            .configurations(
                Configuration::builder()
                    .classification("export")
                    .properties("JAVA_HOME", "/usr/lib/jvm/java-1.8.0"),
            )
            .build();

        let nested = &config.configurations().unwrap()[0];
        assert_eq!(nested.classification(), Some("export"));
        assert_eq!(
            nested.properties().unwrap().get("JAVA_HOME").map(String::as_str),
            Some("/usr/lib/jvm/java-1.8.0")
        );
        assert_eq!(
            config.to_string(),
            "{Classification: hadoop-env,Configurations: [{Classification: export,Properties: {JAVA_HOME=/usr/lib/jvm/java-1.8.0}}]}"
        );
    }

    #[test]
    fn test_kerberos_wire_names() {
        let attributes = KerberosAttributes::builder()
            .realm("EC2.INTERNAL")
            .kdc_admin_password("secret")
            .ad_domain_join_user("admin")
            .build();
        assert_json_snapshot!(attributes, @r#"
        {
          "Realm": "EC2.INTERNAL",
          "KdcAdminPassword": "secret",
          "ADDomainJoinUser": "admin"
        }
        "#);

        let parsed: KerberosAttributes =
            serde_json::from_str(r#"{"Realm":"R","ADDomainJoinPassword":"p"}"#).unwrap();
        assert_eq!(parsed.ad_domain_join_password(), Some("p"));
        assert_eq!(parsed.kdc_admin_password(), None);
    }

    #[test]
    fn test_kerberos_requires_realm_and_password() {
        let err = KerberosAttributes::default().validate().unwrap_err();
        let paths: Vec<&str> = err.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["Realm", "KdcAdminPassword"]);
    }

    #[test]
    fn test_placement_zones_are_checked_per_item() {
        let placement = PlacementType::builder()
            .availability_zones("us-east-1a")
            .availability_zones("z".repeat(300))
            .build();
        let err = placement.validate().unwrap_err();
        assert_eq!(err.violations()[0].path, "AvailabilityZones[1]");
    }

    #[test]
    fn test_nested_configurations_validate() {
        let config = Configuration::builder()
            .classification("outer")
            .configurations(Configuration::builder().classification("inner"))
            .build();
        assert!(config.validate().is_ok());
    }
}
