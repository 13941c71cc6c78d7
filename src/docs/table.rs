//! Raw documentation sources, one table per language.
//!
//! Each source is `title\nexample`; the example may span several lines.

pub(super) const PYTHON: &[(&str, &str)] = &[
    ("def", "Define a function: def name(params):\nExample: def greet(name):\n    return f\"Hello, {name}!\""),
    ("for", "Loop: for item in iterable:\nExample: for i in range(5):\n    print(i)"),
    ("if", "Conditional: if condition:\nExample: if x > 0:\n    print(\"Positive\")"),
    ("import", "Import modules: import module\nExample: import math\nfrom datetime import datetime"),
    ("while", "While loop: while condition:\nExample: while x < 10:\n    x += 1"),
    ("class", "Class definition: class Name:\nExample: class Person:\n    def __init__(self, name):\n        self.name = name"),
    ("try", "Exception handling: try:\nExample: try:\n    result = 10 / 0\nexcept ZeroDivisionError:\n    print(\"Cannot divide by zero\")"),
    ("with", "Context manager: with statement\nExample: with open(\"file.txt\") as f:\n    content = f.read()"),
    ("lambda", "Anonymous function: lambda params: expression\nExample: square = lambda x: x * x"),
    ("return", "Return value from function\nExample: def add(a, b):\n    return a + b"),
];

pub(super) const JAVASCRIPT: &[(&str, &str)] = &[
    ("function", "Define a function: function name(params) { }\nExample: function greet(name) {\n    return `Hello, ${name}!`;\n}"),
    ("let", "Block-scoped variable declaration\nExample: let count = 0;\nif (true) {\n    let count = 1; // Different variable\n}"),
    ("const", "Constant variable declaration\nExample: const PI = 3.14159;\nconst user = { name: \"John\" };"),
    ("import", "ES Module import\nExample: import React from \"react\";\nimport { useState } from \"react\";"),
    ("export", "Export from module\nExample: export const API_URL = \"https://api.example.com\";\nexport default function App() {}"),
    ("class", "Class definition: class Name { }\nExample: class Person {\n    constructor(name) {\n        this.name = name;\n    }\n}"),
    ("async", "Async function declaration\nExample: async function fetchData() {\n    const response = await fetch(\"/api/data\");\n    return response.json();\n}"),
    ("await", "Wait for Promise to resolve\nExample: const data = await fetchData();"),
    ("try", "Exception handling: try { } catch { }\nExample: try {\n    riskyOperation();\n} catch (error) {\n    console.error(error);\n}"),
    ("for", "For loop: for(init; condition; inc) { }\nExample: for (let i = 0; i < 5; i++) {\n    console.log(i);\n}"),
];

pub(super) const CPP: &[(&str, &str)] = &[
    ("int", "Integral type (32-bit): int variable_name;\nExample: int age = 25;\nint numbers[5] = {1, 2, 3, 4, 5};"),
    ("for", "For loop: for(init; condition; inc) { }\nExample: for (int i = 0; i < 10; i++) {\n    cout << i << endl;\n}"),
    ("include", "Include header files: #include <header>\nExample: #include <iostream>\n#include <vector>\n#include <string>"),
    ("using", "Using directive: using namespace std;\nExample: using namespace std;\n// Now you can use cout instead of std::cout"),
    ("class", "Class definition: class Name { };\nExample: class Car {\nprivate:\n    string brand;\npublic:\n    void setBrand(string b) { brand = b; }\n};"),
    ("vector", "Dynamic array: vector<type> name;\nExample: vector<int> numbers;\nnumbers.push_back(42);"),
    ("string", "String type: string variable_name;\nExample: string name = \"Hello\";\ncout << name.length();"),
    ("if", "Conditional: if (condition) { }\nExample: if (x > 0) {\n    cout << \"Positive\";\n} else {\n    cout << \"Negative or zero\";\n}"),
    ("while", "While loop: while (condition) { }\nExample: while (i < 10) {\n    cout << i;\n    i++;\n}"),
    ("return", "Return value from function\nExample: int add(int a, int b) {\n    return a + b;\n}"),
];

pub(super) const JAVA: &[(&str, &str)] = &[
    ("class", "Class declaration: class Name { }\nExample: public class Person {\n    private String name;\n    public Person(String name) {\n        this.name = name;\n    }\n}"),
    ("public", "Access modifier: public\nExample: public class Main {\n    public static void main(String[] args) {\n        // Code here\n    }\n}"),
    ("static", "Static member belongs to the class, not instances\nExample: public static void main(String[] args) {\n    // Static method\n}"),
    ("private", "Private access modifier\nExample: private String name;\nprivate int age;"),
    ("void", "Method that returns nothing\nExample: public void printMessage() {\n    System.out.println(\"Hello\");\n}"),
    ("String", "String type: String variable_name;\nExample: String name = \"John\";\nSystem.out.println(name.length());"),
    ("int", "Integer type: int variable_name;\nExample: int age = 25;\nint[] numbers = {1, 2, 3, 4, 5};"),
    ("if", "Conditional: if (condition) { }\nExample: if (age >= 18) {\n    System.out.println(\"Adult\");\n} else {\n    System.out.println(\"Minor\");\n}"),
    ("for", "For loop: for(init; condition; inc) { }\nExample: for (int i = 0; i < 5; i++) {\n    System.out.println(i);\n}"),
    ("import", "Import packages: import package.Class;\nExample: import java.util.ArrayList;\nimport java.util.Scanner;"),
];
