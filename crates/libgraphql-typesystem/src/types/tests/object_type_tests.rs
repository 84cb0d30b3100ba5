use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuildErrorKind;
use crate::test_utils;
use crate::types::Argument;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::builtin_scalars;
use indexmap::IndexMap;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod fields {
    use super::*;

    #[test]
    fn accepts_fields_map() -> Result<()> {
        test_utils::setup_logger();
        let obj_type = ObjectType::builder("SomeObject")
            .fields(IndexMap::from([("f".to_string(), test_utils::string_field())]))
            .build()?;

        test_utils::schema_with_field_type(obj_type)?;
        Ok(())
    }

    #[test]
    fn accepts_fields_producer() -> Result<()> {
        test_utils::setup_logger();
        let obj_type = ObjectType::builder("SomeObject")
            .fields_with(|| {
                IndexMap::from([("f".to_string(), test_utils::string_field())])
            })
            .build()?;

        test_utils::schema_with_field_type(obj_type)?;
        Ok(())
    }

    #[test]
    fn rejects_missing_fields() {
        let err = ObjectType::builder("SomeObject").build().unwrap_err();

        assert_eq!(err, SchemaBuildError::InvalidFieldMap {
            type_name: "SomeObject".to_string(),
        });
        assert_eq!(err.kind(), SchemaBuildErrorKind::Definition);
    }

    #[test]
    fn rejects_incorrectly_named_fields() -> Result<()> {
        let obj_type = ObjectType::builder("SomeObject")
            .field("bad-name-with-dashes", test_utils::string_field())
            .build()?;

        assert_eq!(
            test_utils::schema_with_field_type(obj_type).unwrap_err().to_string(),
            "Names must match /^[_a-zA-Z][_a-zA-Z0-9]*$/ but \
            \"bad-name-with-dashes\" does not.",
        );
        Ok(())
    }

    #[test]
    fn rejects_empty_fields() -> Result<()> {
        let obj_type = ObjectType::builder("SomeObject")
            .fields(IndexMap::new())
            .build()?;

        assert_eq!(
            test_utils::schema_with_field_type(obj_type).unwrap_err().to_string(),
            "SomeObject fields must be an mapping (dict) with field names as \
            keys or a function which returns such an mapping.",
        );
        Ok(())
    }

    #[test]
    fn rejects_producer_returning_empty_fields() -> Result<()> {
        let obj_type = ObjectType::builder("SomeObject")
            .fields_with(IndexMap::new)
            .build()?;

        assert_eq!(
            test_utils::schema_with_field_type(obj_type).unwrap_err(),
            SchemaBuildError::InvalidFieldMap {
                type_name: "SomeObject".to_string(),
            },
        );
        Ok(())
    }

    #[test]
    fn rejects_input_typed_fields() -> Result<()> {
        for field_type in test_utils::not_output_types() {
            let obj_type = ObjectType::builder("BadObject")
                .field("badField", Field::new(field_type.clone()))
                .build()?;

            let err = test_utils::schema_with_field_type(obj_type).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("BadObject.badField field type must be Output Type but got: {field_type}"),
            );
            assert_eq!(err.kind(), SchemaBuildErrorKind::Classification);
        }
        Ok(())
    }

    #[test]
    fn accepts_output_typed_fields() -> Result<()> {
        for field_type in test_utils::output_types() {
            let obj_type = ObjectType::builder("GoodObject")
                .field("goodField", Field::new(field_type))
                .build()?;
            test_utils::schema_with_field_type(obj_type)?;
        }
        Ok(())
    }

    #[test]
    fn fields_are_named_after_their_keys() -> Result<()> {
        let obj_type = ObjectType::builder("SomeObject")
            .field(
                "greeting",
                test_utils::string_field()
                    .with_argument("name", Argument::new(builtin_scalars::string()))
                    .with_description("Says hello")
                    .with_deprecation_reason("Use `salutation`"),
            )
            .build()?;

        let field = obj_type.field("greeting")?.unwrap();
        assert_eq!(field.name(), "greeting");
        assert_eq!(field.args()["name"].name(), "name");
        assert_eq!(field.description(), Some("Says hello"));
        assert!(field.is_deprecated());
        assert!(obj_type.field("missing")?.is_none());
        Ok(())
    }

    #[test]
    fn reused_field_values_are_named_per_type() -> Result<()> {
        let shared_field = test_utils::string_field();
        let a = ObjectType::builder("A")
            .field("first", shared_field.clone())
            .build()?;
        let b = ObjectType::builder("B")
            .field("second", shared_field)
            .build()?;

        assert_eq!(a.fields()?["first"].name(), "first");
        assert_eq!(b.fields()?["second"].name(), "second");
        Ok(())
    }

    #[test]
    fn field_producer_runs_exactly_once() -> Result<()> {
        test_utils::setup_logger();
        let calls = Arc::new(AtomicUsize::new(0));
        let producer_calls = Arc::clone(&calls);
        let obj_type = ObjectType::builder("SomeObject")
            .fields_with(move || {
                producer_calls.fetch_add(1, Ordering::SeqCst);
                IndexMap::from([("f".to_string(), test_utils::string_field())])
            })
            .build()?;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        obj_type.fields()?;
        obj_type.clone().fields()?;
        test_utils::schema_with_field_type(obj_type)?;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[test]
    fn definition_failures_are_memoized() -> Result<()> {
        let calls = Arc::new(AtomicUsize::new(0));
        let producer_calls = Arc::clone(&calls);
        let obj_type = ObjectType::builder("SomeObject")
            .fields_with(move || {
                producer_calls.fetch_add(1, Ordering::SeqCst);
                IndexMap::new()
            })
            .build()?;

        let first = obj_type.fields().unwrap_err();
        let second = obj_type.fields().unwrap_err();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[test]
    fn producers_allow_mutually_recursive_types() -> Result<()> {
        use std::sync::OnceLock;

        let person_cell = Arc::new(OnceLock::<ObjectType>::new());
        let company_person_cell = Arc::clone(&person_cell);
        let company = ObjectType::builder("Company")
            .fields_with(move || IndexMap::from([(
                "ceo".to_string(),
                Field::new(company_person_cell.get().cloned().unwrap()),
            )]))
            .build()?;

        let person_company = company.clone();
        let person = ObjectType::builder("Person")
            .fields_with(move || IndexMap::from([
                ("name".to_string(), test_utils::string_field()),
                ("employer".to_string(), Field::new(person_company)),
            ]))
            .build()?;
        person_cell.set(person.clone()).unwrap();

        let schema = test_utils::schema_with_field_type(person)?;
        assert!(schema.get_type("Company").is_some());
        assert!(schema.get_type("Person").is_some());
        Ok(())
    }

    #[test]
    #[should_panic(expected = "an earlier evaluation of this lazy definition panicked")]
    fn access_after_a_panicking_producer_reports_the_earlier_panic() {
        let obj_type = ObjectType::builder("SomeObject")
            .fields_with(|| panic!("fields producer failed"))
            .build()
            .unwrap();

        let first_access = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            obj_type.fields().map(|fields| fields.len())
        }));
        assert!(first_access.is_err());

        let _ = obj_type.fields();
    }
}

mod args {
    use super::*;

    #[test]
    fn accepts_field_args() -> Result<()> {
        let obj_type = ObjectType::builder("SomeObject")
            .field(
                "goodField",
                test_utils::string_field()
                    .with_argument("goodArg", Argument::new(builtin_scalars::string())),
            )
            .build()?;

        test_utils::schema_with_field_type(obj_type)?;
        Ok(())
    }

    #[test]
    fn rejects_incorrectly_named_args() -> Result<()> {
        let obj_type = ObjectType::builder("SomeObject")
            .field(
                "badField",
                test_utils::string_field().with_argument(
                    "bad-name-with-dashes",
                    Argument::new(builtin_scalars::string()),
                ),
            )
            .build()?;

        assert_eq!(
            test_utils::schema_with_field_type(obj_type).unwrap_err(),
            SchemaBuildError::InvalidName {
                name: "bad-name-with-dashes".to_string(),
            },
        );
        Ok(())
    }

    #[test]
    fn rejects_output_typed_args() -> Result<()> {
        for arg_type in test_utils::not_input_types() {
            let obj_type = ObjectType::builder("BadObject")
                .field(
                    "badField",
                    test_utils::string_field()
                        .with_argument("badArg", Argument::new(arg_type.clone())),
                )
                .build()?;

            assert_eq!(
                test_utils::schema_with_field_type(obj_type).unwrap_err().to_string(),
                format!(
                    "BadObject.badField(badArg:) argument type must be Input \
                    Type but got: {arg_type}.",
                ),
            );
        }
        Ok(())
    }

    #[test]
    fn accepts_input_typed_args() -> Result<()> {
        for arg_type in test_utils::input_types() {
            let obj_type = ObjectType::builder("GoodObject")
                .field(
                    "goodField",
                    test_utils::string_field()
                        .with_argument("goodArg", Argument::new(arg_type)),
                )
                .build()?;
            test_utils::schema_with_field_type(obj_type)?;
        }
        Ok(())
    }
}

mod names {
    use super::*;

    #[test]
    fn accepts_valid_names() -> Result<()> {
        for name in ["_", "a", "Z", "_underscored", "camelCase", "with123digits"] {
            ObjectType::builder(name)
                .field(name, test_utils::string_field())
                .build()?
                .fields()?;
        }
        Ok(())
    }

    #[test]
    fn rejects_invalid_type_names() {
        for name in ["bad-name-with-dashes", "1startsWithDigit", "has space", "ünïcode"] {
            assert_eq!(
                ObjectType::builder(name)
                    .field("f", test_utils::string_field())
                    .build()
                    .unwrap_err(),
                SchemaBuildError::InvalidName {
                    name: name.to_string(),
                },
            );
        }
    }

    #[test]
    fn rejects_missing_type_name() {
        let err = ObjectType::builder("")
            .field("f", test_utils::string_field())
            .build()
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::MissingTypeName);
        assert_eq!(err.to_string(), "Type must be named.");
    }
}

mod interfaces {
    use super::*;

    fn interface_without_resolve_type() -> InterfaceType {
        InterfaceType::builder("AnotherInterface")
            .field("f", test_utils::string_field())
            .build()
            .unwrap()
    }

    #[test]
    fn accepts_interface_list() -> Result<()> {
        let obj_type = ObjectType::builder("SomeObject")
            .field("f", test_utils::string_field())
            .interfaces(vec![test_utils::some_interface_type()])
            .build()?;

        assert_eq!(obj_type.interfaces()?.len(), 1);
        assert!(obj_type.implements_interface(&test_utils::some_interface_type())?);
        test_utils::schema_with_field_type(obj_type)?;
        Ok(())
    }

    #[test]
    fn accepts_interfaces_producer() -> Result<()> {
        let obj_type = ObjectType::builder("SomeObject")
            .field("f", test_utils::string_field())
            .interfaces_with(|| vec![test_utils::some_interface_type()])
            .build()?;

        assert_eq!(obj_type.interfaces()?[0].name(), "SomeInterface");
        Ok(())
    }

    #[test]
    fn accepts_implementor_with_is_type_of() -> Result<()> {
        let obj_type = ObjectType::builder("SomeObject")
            .field("f", test_utils::string_field())
            .interfaces(vec![interface_without_resolve_type()])
            .is_type_of(|_| true)
            .build()?;

        test_utils::schema_with_field_type(obj_type)?;
        Ok(())
    }

    #[test]
    fn rejects_unresolvable_implementor() {
        let err = ObjectType::builder("SomeObject")
            .field("f", test_utils::string_field())
            .interfaces(vec![interface_without_resolve_type()])
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Interface Type AnotherInterface does not provide a \"resolve_type\" \
            function and implementing Type SomeObject does not provide a \
            \"is_type_of\" function. There is no way to resolve this \
            implementing type during execution.",
        );
    }

    #[test]
    fn rejects_unresolvable_produced_implementor_on_first_access() -> Result<()> {
        let obj_type = ObjectType::builder("SomeObject")
            .field("f", test_utils::string_field())
            .interfaces_with(|| vec![interface_without_resolve_type()])
            .build()?;

        let err = test_utils::schema_with_field_type(obj_type.clone()).unwrap_err();
        assert_eq!(
            err,
            SchemaBuildError::UnresolvableInterfaceImplementor {
                interface_name: "AnotherInterface".to_string(),
                type_name: "SomeObject".to_string(),
            },
        );
        assert_eq!(obj_type.interfaces().unwrap_err(), err);
        Ok(())
    }

    #[test]
    fn is_type_of_defaults_to_false() {
        let value = crate::Value::Null;

        assert!(!test_utils::some_object_type().is_type_of(&value));
        assert!(test_utils::object_with_is_type_of().is_type_of(&value));
        assert!(!test_utils::some_object_type().has_is_type_of());
    }

    #[test]
    fn object_types_convert_into_graphql_types() {
        let type_ = GraphQLType::from(test_utils::some_object_type());
        assert!(type_.as_object().is_some_and(|obj| obj.ptr_eq(&test_utils::some_object_type())));
    }
}
