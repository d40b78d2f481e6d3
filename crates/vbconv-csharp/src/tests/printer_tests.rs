use super::*;
use vbconv_common::Trivia;

fn class(identifier: &str, members: Vec<Member>) -> Member {
    Member::Type(TypeDeclaration {
        keyword: TypeKeyword::Class,
        attributes: Vec::new(),
        modifiers: [Modifier::Public].into_iter().collect(),
        identifier: identifier.to_string(),
        type_parameters: Vec::new(),
        base_list: Vec::new(),
        constraints: Vec::new(),
        members,
    })
}

fn method(identifier: &str, body: Vec<Statement>) -> Member {
    Member::Method(MethodDeclaration {
        attributes: Vec::new(),
        modifiers: [Modifier::Public].into_iter().collect(),
        return_type: TypeSyntax::void(),
        identifier: identifier.to_string(),
        type_parameters: Vec::new(),
        parameters: Vec::new(),
        constraints: Vec::new(),
        body: Some(body),
    })
}

fn field(identifier: &str) -> Member {
    Member::Field(FieldDeclaration {
        attributes: Vec::new(),
        modifiers: [Modifier::Private].into_iter().collect(),
        declaration: VariableDeclaration::single(
            TypeSyntax::Predefined(PredefinedType::Int),
            identifier,
            None,
        ),
    })
}

#[test]
fn test_binary_operands_are_parenthesized_by_precedence() {
    let sum = Expr::binary(Expr::id("a"), BinaryOperator::Add, Expr::id("b"));
    let product = Expr::binary(sum.clone(), BinaryOperator::Multiply, Expr::id("c"));
    assert_eq!(CSharpPrinter::expression_to_string(&product), "(a + b) * c");

    let product = Expr::binary(Expr::id("c"), BinaryOperator::Multiply, Expr::id("d"));
    let sum = Expr::binary(Expr::id("a"), BinaryOperator::Add, product);
    assert_eq!(CSharpPrinter::expression_to_string(&sum), "a + c * d");
}

#[test]
fn test_left_associative_subtraction_keeps_right_grouping() {
    let inner = Expr::binary(Expr::id("b"), BinaryOperator::Subtract, Expr::id("c"));
    let outer = Expr::binary(Expr::id("a"), BinaryOperator::Subtract, inner);
    assert_eq!(CSharpPrinter::expression_to_string(&outer), "a - (b - c)");
}

#[test]
fn test_member_access_on_cast_is_parenthesized() {
    let cast = Expr::Cast {
        ty: TypeSyntax::named("Form"),
        expression: Box::new(Expr::id("sender")),
    };
    let access = Expr::member(cast, "Text");
    assert_eq!(
        CSharpPrinter::expression_to_string(&access),
        "((Form)sender).Text"
    );
}

#[test]
fn test_signed_operand_of_named_cast_is_parenthesized() {
    let negated = Expr::prefix(PrefixOperator::Minus, Expr::id("x"));
    let named = Expr::Cast {
        ty: TypeSyntax::named("Color"),
        expression: Box::new(negated.clone()),
    };
    assert_eq!(CSharpPrinter::expression_to_string(&named), "(Color)(-x)");

    let keyword = Expr::Cast {
        ty: TypeSyntax::Predefined(PredefinedType::Int),
        expression: Box::new(negated),
    };
    assert_eq!(CSharpPrinter::expression_to_string(&keyword), "(int)-x");

    let not = Expr::Cast {
        ty: TypeSyntax::named("Flags"),
        expression: Box::new(Expr::prefix(PrefixOperator::BitwiseNot, Expr::id("mask"))),
    };
    assert_eq!(CSharpPrinter::expression_to_string(&not), "(Flags)~mask");
}

#[test]
fn test_string_literals_are_escaped() {
    let expr = Expr::string("say \"hi\"\n\\");
    assert_eq!(
        CSharpPrinter::expression_to_string(&expr),
        r#""say \"hi\"\n\\""#
    );
    assert_eq!(
        CSharpPrinter::expression_to_string(&Expr::Literal(Literal::Char('\''))),
        r"'\''"
    );
}

#[test]
fn test_interpolated_conditional_is_wrapped() {
    let expr = Expr::InterpolatedString(vec![
        InterpolatedContent::Text("Value: ".to_string()),
        InterpolatedContent::Interpolation {
            expression: Box::new(Expr::Conditional {
                condition: Box::new(Expr::id("ok")),
                when_true: Box::new(Expr::string("yes")),
                when_false: Box::new(Expr::string("no")),
            }),
            alignment: None,
            format: None,
        },
        InterpolatedContent::Interpolation {
            expression: Box::new(Expr::id("total")),
            alignment: Some(Box::new(Expr::number("10"))),
            format: Some("N2".to_string()),
        },
    ]);
    assert_eq!(
        CSharpPrinter::expression_to_string(&expr),
        r#"$"Value: {(ok ? "yes" : "no")}{total,10:N2}""#
    );
}

#[test]
fn test_conditional_access_with_member_binding() {
    let expr = Expr::ConditionalAccess {
        expression: Box::new(Expr::id("Changed")),
        when_not_null: Box::new(Expr::Invocation {
            expression: Box::new(Expr::MemberBinding {
                name: "Invoke".to_string(),
            }),
            arguments: vec![Argument::new(Expr::This)],
        }),
    };
    assert_eq!(
        CSharpPrinter::expression_to_string(&expr),
        "Changed?.Invoke(this)"
    );
}

#[test]
fn test_arguments_with_ref_and_name() {
    let expr = Expr::Invocation {
        expression: Box::new(Expr::id("Swap")),
        arguments: vec![
            Argument {
                name_colon: None,
                ref_kind: Some(ArgumentRefKind::Ref),
                expression: Expr::id("a"),
            },
            Argument {
                name_colon: Some("count".to_string()),
                ref_kind: None,
                expression: Expr::number("3"),
            },
        ],
    };
    assert_eq!(
        CSharpPrinter::expression_to_string(&expr),
        "Swap(ref a, count: 3)"
    );
}

#[test]
fn test_double_negation_does_not_print_decrement() {
    let expr = Expr::prefix(
        PrefixOperator::Minus,
        Expr::prefix(PrefixOperator::Minus, Expr::id("x")),
    );
    assert_eq!(CSharpPrinter::expression_to_string(&expr), "-(-x)");
}

#[test]
fn test_array_types_and_creation() {
    let ty = TypeSyntax::Array {
        element: Box::new(TypeSyntax::Predefined(PredefinedType::Int)),
        ranks: vec![ArrayRank::omitted(2)],
    };
    assert_eq!(CSharpPrinter::type_to_string(&ty), "int[,]");

    let sized = Expr::ArrayCreation {
        ty: TypeSyntax::Array {
            element: Box::new(TypeSyntax::Predefined(PredefinedType::Int)),
            ranks: vec![ArrayRank {
                sizes: vec![Some(Expr::binary(
                    Expr::number("5"),
                    BinaryOperator::Add,
                    Expr::number("1"),
                ))],
            }],
        },
        initializer: None,
    };
    assert_eq!(CSharpPrinter::expression_to_string(&sized), "new int[5 + 1]");

    let literal = Expr::ArrayCreation {
        ty: TypeSyntax::Predefined(PredefinedType::Int).array_of(),
        initializer: Some(Initializer {
            kind: InitializerKind::Array,
            expressions: vec![Expr::number("1"), Expr::number("2")],
        }),
    };
    assert_eq!(
        CSharpPrinter::expression_to_string(&literal),
        "new int[] { 1, 2 }"
    );
}

#[test]
fn test_object_creation_forms() {
    let plain = Expr::ObjectCreation {
        ty: TypeSyntax::named("Foo"),
        arguments: None,
        initializer: None,
    };
    assert_eq!(CSharpPrinter::expression_to_string(&plain), "new Foo()");

    let with_initializer = Expr::ObjectCreation {
        ty: TypeSyntax::named("Point"),
        arguments: None,
        initializer: Some(Initializer {
            kind: InitializerKind::Object,
            expressions: vec![Expr::assign(
                Expr::id("X"),
                AssignmentOperator::Simple,
                Expr::number("1"),
            )],
        }),
    };
    assert_eq!(
        CSharpPrinter::expression_to_string(&with_initializer),
        "new Point { X = 1 }"
    );
}

#[test]
fn test_if_else_if_chain_layout() {
    let stmt = Statement::If {
        condition: Expr::id("a"),
        statement: Box::new(Statement::Block(vec![Statement::expr(Expr::call(
            Expr::id("One"),
            vec![],
        ))])),
        else_clause: Some(Box::new(Statement::If {
            condition: Expr::id("b"),
            statement: Box::new(Statement::Block(vec![])),
            else_clause: Some(Box::new(Statement::Block(vec![Statement::Return(None)]))),
        })),
    };
    let expected = "\
if (a)
{
    One();
}
else if (b)
{
}
else
{
    return;
}";
    assert_eq!(CSharpPrinter::statement_to_string(&stmt), expected);
}

#[test]
fn test_embedded_statement_is_indented() {
    let stmt = Statement::While {
        condition: Expr::Literal(Literal::Bool(true)),
        statement: Box::new(Statement::Break),
    };
    assert_eq!(
        CSharpPrinter::statement_to_string(&stmt),
        "while (true)\n    break;"
    );
}

#[test]
fn test_switch_layout() {
    let stmt = Statement::Switch {
        expression: Expr::id("x"),
        sections: vec![
            SwitchSection {
                labels: vec![
                    SwitchLabel::Case(Expr::number("1")),
                    SwitchLabel::Case(Expr::number("2")),
                ],
                statements: vec![Statement::Block(vec![Statement::Break])],
            },
            SwitchSection {
                labels: vec![SwitchLabel::Default],
                statements: vec![Statement::Block(vec![Statement::Break])],
            },
        ],
    };
    let expected = "\
switch (x)
{
    case 1:
    case 2:
        {
            break;
        }
    default:
        {
            break;
        }
}";
    assert_eq!(CSharpPrinter::statement_to_string(&stmt), expected);
}

#[test]
fn test_do_while_and_try_layout() {
    let stmt = Statement::Try {
        block: vec![Statement::Do {
            statement: Box::new(Statement::Block(vec![])),
            condition: Expr::id("more"),
        }],
        catches: vec![CatchClause {
            declaration: Some(CatchDeclaration {
                ty: TypeSyntax::named("Exception"),
                identifier: Some("ex".to_string()),
            }),
            filter: None,
            block: vec![Statement::Throw(None)],
        }],
        finally: Some(vec![]),
    };
    let expected = "\
try
{
    do
    {
    }
    while (more);
}
catch (Exception ex)
{
    throw;
}
finally
{
}";
    assert_eq!(CSharpPrinter::statement_to_string(&stmt), expected);
}

#[test]
fn test_nested_usings_stack() {
    let stmt = Statement::Using {
        declaration: Some(VariableDeclaration::single(
            TypeSyntax::Var,
            "a",
            Some(Expr::call(Expr::id("OpenA"), vec![])),
        )),
        expression: None,
        statement: Box::new(Statement::Using {
            declaration: None,
            expression: Some(Expr::id("b")),
            statement: Box::new(Statement::Block(vec![])),
        }),
    };
    assert_eq!(
        CSharpPrinter::statement_to_string(&stmt),
        "using (var a = OpenA())\nusing (b)\n{\n}"
    );
}

#[test]
fn test_statement_comments() {
    let stmt = Statement::Return(Some(Expr::number("1"))).with_trivia(Trivia {
        leading: vec!["// result".to_string()],
        trailing: Some("// done".to_string()),
    });
    assert_eq!(
        CSharpPrinter::statement_to_string(&stmt),
        "// result\nreturn 1; // done"
    );
}

#[test]
fn test_block_lambda_layout() {
    let stmt = Statement::local(
        TypeSyntax::named("Action"),
        "run",
        Some(Expr::Lambda {
            is_async: false,
            parameters: LambdaParameters::List(Vec::new()),
            body: LambdaBody::Block(vec![Statement::expr(Expr::call(Expr::id("Go"), vec![]))]),
        }),
    );
    assert_eq!(
        CSharpPrinter::statement_to_string(&stmt),
        "Action run = () =>\n{\n    Go();\n};"
    );
}

#[test]
fn test_compilation_unit_layout() {
    let unit = CompilationUnit {
        usings: vec![UsingDirective {
            alias: None,
            name: Name::dotted("System"),
        }],
        attributes: Vec::new(),
        members: vec![Member::Namespace {
            name: Name::dotted("Demo.App"),
            members: vec![class(
                "Foo",
                vec![field("a"), field("b"), method("Run", vec![])],
            )],
        }],
    };
    let expected = "\
using System;

namespace Demo.App
{
    public class Foo
    {
        private int a;
        private int b;

        public void Run()
        {
        }
    }
}
";
    assert_eq!(CSharpPrinter::print_to_string(&unit), expected);
}

#[test]
fn test_auto_property_and_accessor_bodies() {
    let auto = Member::Property(PropertyDeclaration {
        attributes: Vec::new(),
        modifiers: [Modifier::Public].into_iter().collect(),
        ty: TypeSyntax::Predefined(PredefinedType::String),
        identifier: "Name".to_string(),
        accessors: vec![Accessor::auto(AccessorKind::Get), Accessor::auto(AccessorKind::Set)],
        initializer: Some(Expr::string("")),
    });
    assert_eq!(
        CSharpPrinter::member_to_string(&auto),
        "public string Name { get; set; } = \"\";"
    );

    let computed = Member::Property(PropertyDeclaration {
        attributes: Vec::new(),
        modifiers: [Modifier::Public].into_iter().collect(),
        ty: TypeSyntax::Predefined(PredefinedType::Int),
        identifier: "Count".to_string(),
        accessors: vec![Accessor {
            kind: AccessorKind::Get,
            attributes: Vec::new(),
            modifiers: Modifiers::new(),
            body: Some(vec![Statement::Return(Some(Expr::id("count")))]),
        }],
        initializer: None,
    });
    let expected = "\
public int Count
{
    get
    {
        return count;
    }
}";
    assert_eq!(CSharpPrinter::member_to_string(&computed), expected);
}

#[test]
fn test_enum_members_are_comma_separated() {
    let member = Member::Enum(EnumDeclaration {
        attributes: Vec::new(),
        modifiers: [Modifier::Public].into_iter().collect(),
        identifier: "Color".to_string(),
        base_type: Some(TypeSyntax::Predefined(PredefinedType::Byte)),
        members: vec![
            EnumMemberDeclaration {
                attributes: Vec::new(),
                identifier: "Red".to_string(),
                value: None,
                trivia: Trivia::default(),
            },
            EnumMemberDeclaration {
                attributes: Vec::new(),
                identifier: "Green".to_string(),
                value: Some(Expr::number("2")),
                trivia: Trivia::default(),
            },
        ],
    });
    assert_eq!(
        CSharpPrinter::member_to_string(&member),
        "public enum Color : byte\n{\n    Red,\n    Green = 2\n}"
    );
}

#[test]
fn test_constructor_initializer_and_generic_constraints() {
    let ctor = Member::Constructor(ConstructorDeclaration {
        attributes: Vec::new(),
        modifiers: [Modifier::Public].into_iter().collect(),
        identifier: "Derived".to_string(),
        parameters: vec![Parameter::new(
            Some(TypeSyntax::Predefined(PredefinedType::Int)),
            "x",
        )],
        initializer: Some(ConstructorInitializer {
            kind: ConstructorInitializerKind::Base,
            arguments: vec![Argument::new(Expr::id("x"))],
        }),
        body: Vec::new(),
    });
    assert_eq!(
        CSharpPrinter::member_to_string(&ctor),
        "public Derived(int x) : base(x)\n{\n}"
    );

    let delegate = Member::Delegate(DelegateDeclaration {
        attributes: Vec::new(),
        modifiers: [Modifier::Public].into_iter().collect(),
        return_type: TypeSyntax::named("T"),
        identifier: "Factory".to_string(),
        type_parameters: vec![TypeParameter {
            variance: Some(Variance::Out),
            identifier: "T".to_string(),
        }],
        parameters: Vec::new(),
        constraints: vec![ConstraintClause {
            type_parameter: "T".to_string(),
            constraints: vec![TypeConstraint::Class, TypeConstraint::Constructor],
        }],
    });
    assert_eq!(
        CSharpPrinter::member_to_string(&delegate),
        "public delegate T Factory<out T>() where T : class, new();"
    );
}
