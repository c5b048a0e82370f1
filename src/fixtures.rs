//! SQL fixtures for building test databases.

/// `Employee` with three rows and an empty `Customer` table.
pub const EMPLOYEE_CUSTOMER: &str = r#"
CREATE TABLE Employee (
    EmployeeId INTEGER PRIMARY KEY NOT NULL,
    LastName NVARCHAR(20) NOT NULL,
    FirstName NVARCHAR(20) NOT NULL
);
INSERT INTO Employee VALUES (1, 'Adams', 'Andrew');
INSERT INTO Employee VALUES (2, 'Edwards', 'Nancy');
INSERT INTO Employee VALUES (3, 'Peacock', 'Jane');

CREATE TABLE Customer (
    CustomerId INTEGER PRIMARY KEY NOT NULL,
    FirstName NVARCHAR(40) NOT NULL,
    LastName NVARCHAR(20) NOT NULL,
    Email NVARCHAR(60) NOT NULL
);
"#;

/// A slice of the Chinook sample database: eight employees (more than one
/// default page) plus a few related tables.
pub const CHINOOK_SAMPLE: &str = r#"
CREATE TABLE Artist (
    ArtistId INTEGER PRIMARY KEY NOT NULL,
    Name NVARCHAR(120)
);
INSERT INTO Artist VALUES (1, 'AC/DC');
INSERT INTO Artist VALUES (2, 'Accept');

CREATE TABLE Album (
    AlbumId INTEGER PRIMARY KEY NOT NULL,
    Title NVARCHAR(160) NOT NULL,
    ArtistId INTEGER NOT NULL REFERENCES Artist (ArtistId)
);
INSERT INTO Album VALUES (1, 'For Those About To Rock We Salute You', 1);
INSERT INTO Album VALUES (2, 'Balls to the Wall', 2);
INSERT INTO Album VALUES (3, 'Restless and Wild', 2);

CREATE TABLE Employee (
    EmployeeId INTEGER PRIMARY KEY NOT NULL,
    LastName NVARCHAR(20) NOT NULL,
    FirstName NVARCHAR(20) NOT NULL,
    Title NVARCHAR(30),
    ReportsTo INTEGER REFERENCES Employee (EmployeeId)
);
INSERT INTO Employee VALUES (1, 'Adams', 'Andrew', 'General Manager', NULL);
INSERT INTO Employee VALUES (2, 'Edwards', 'Nancy', 'Sales Manager', 1);
INSERT INTO Employee VALUES (3, 'Peacock', 'Jane', 'Sales Support Agent', 2);
INSERT INTO Employee VALUES (4, 'Park', 'Margaret', 'Sales Support Agent', 2);
INSERT INTO Employee VALUES (5, 'Johnson', 'Steve', 'Sales Support Agent', 2);
INSERT INTO Employee VALUES (6, 'Mitchell', 'Michael', 'IT Manager', 1);
INSERT INTO Employee VALUES (7, 'King', 'Robert', 'IT Staff', 6);
INSERT INTO Employee VALUES (8, 'Callahan', 'Laura', 'IT Staff', 6);

CREATE TABLE Customer (
    CustomerId INTEGER PRIMARY KEY NOT NULL,
    FirstName NVARCHAR(40) NOT NULL,
    LastName NVARCHAR(20) NOT NULL,
    SupportRepId INTEGER REFERENCES Employee (EmployeeId)
);
INSERT INTO Customer VALUES (1, 'Luís', 'Gonçalves', 3);
INSERT INTO Customer VALUES (2, 'Leonie', 'Köhler', 5);

CREATE VIEW AlbumTitles AS SELECT Title FROM Album;
"#;

/// A database with tables but no `Employee`.
pub const NO_EMPLOYEE: &str = r#"
CREATE TABLE Artist (ArtistId INTEGER PRIMARY KEY NOT NULL, Name NVARCHAR(120));
CREATE TABLE Genre (GenreId INTEGER PRIMARY KEY NOT NULL, Name NVARCHAR(120));
INSERT INTO Genre VALUES (1, 'Rock');
"#;
