//! Database schema definitions and SQL constants.
//!
//! Table and column names follow the airline schema the application was
//! built against. CHECK constraints repeat the field rules so rows written
//! by other tools are held to the same limits.

/// Current schema version for the database.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the Plane table.
pub const CREATE_PLANE_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Plane (
        id INTEGER PRIMARY KEY NOT NULL,
        make TEXT NOT NULL CHECK (length(make) BETWEEN 1 AND 32),
        model TEXT NOT NULL CHECK (length(model) BETWEEN 1 AND 64),
        age INTEGER NOT NULL CHECK (age BETWEEN 0 AND 9999),
        seats INTEGER NOT NULL CHECK (seats > 0 AND seats < 500)
    )";

/// SQL statement to create the Pilot table.
pub const CREATE_PILOT_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Pilot (
        id INTEGER PRIMARY KEY NOT NULL,
        fullname TEXT NOT NULL CHECK (length(fullname) <= 128),
        nationality TEXT NOT NULL CHECK (length(nationality) <= 24)
    )";

/// SQL statement to create the Technician table.
pub const CREATE_TECHNICIAN_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Technician (
        id INTEGER PRIMARY KEY NOT NULL,
        full_name TEXT NOT NULL CHECK (length(full_name) BETWEEN 1 AND 128)
    )";

/// SQL statement to create the Customer table.
///
/// Phone numbers are either empty or exactly ten digits.
pub const CREATE_CUSTOMER_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Customer (
        id INTEGER PRIMARY KEY NOT NULL,
        fname TEXT NOT NULL CHECK (length(fname) BETWEEN 1 AND 24),
        lname TEXT NOT NULL CHECK (length(lname) BETWEEN 1 AND 24),
        gtype TEXT NOT NULL CHECK (gtype IN ('M', 'F')),
        dob TEXT NOT NULL,
        address TEXT NOT NULL CHECK (length(address) <= 256),
        phone TEXT NOT NULL
            CHECK (phone = '' OR (length(phone) = 10 AND phone NOT GLOB '*[^0-9]*')),
        zipcode TEXT NOT NULL CHECK (length(zipcode) <= 10)
    )";

/// SQL statement to create the Flight table.
pub const CREATE_FLIGHT_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Flight (
        fnum INTEGER PRIMARY KEY NOT NULL,
        cost INTEGER NOT NULL CHECK (cost > 0),
        num_sold INTEGER NOT NULL CHECK (num_sold >= 0),
        num_stops INTEGER NOT NULL CHECK (num_stops >= 0),
        actual_departure_date TEXT NOT NULL,
        actual_arrival_date TEXT NOT NULL,
        arrival_airport TEXT NOT NULL CHECK (length(arrival_airport) BETWEEN 1 AND 5),
        departure_airport TEXT NOT NULL CHECK (length(departure_airport) BETWEEN 1 AND 5)
    )";

/// SQL statement to create the `FlightInfo` table.
pub const CREATE_FLIGHT_INFO_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS FlightInfo (
        fiid INTEGER PRIMARY KEY NOT NULL,
        flight_id INTEGER NOT NULL REFERENCES Flight(fnum),
        pilot_id INTEGER NOT NULL REFERENCES Pilot(id),
        plane_id INTEGER NOT NULL REFERENCES Plane(id)
    )";

/// SQL statement to create the Schedule table.
pub const CREATE_SCHEDULE_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Schedule (
        id INTEGER PRIMARY KEY NOT NULL,
        flightNum INTEGER NOT NULL REFERENCES Flight(fnum),
        departure_time TEXT NOT NULL,
        arrival_time TEXT NOT NULL
    )";

/// SQL statement to create the Repairs table.
pub const CREATE_REPAIRS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Repairs (
        rid INTEGER PRIMARY KEY NOT NULL,
        repair_date TEXT NOT NULL,
        repair_code TEXT NOT NULL CHECK (repair_code IN ('MJ', 'MN', 'SV')),
        pilot_id INTEGER NOT NULL REFERENCES Pilot(id),
        plane_id INTEGER NOT NULL REFERENCES Plane(id),
        technician_id INTEGER NOT NULL REFERENCES Technician(id)
    )";

/// SQL statement to create the Reservation table.
pub const CREATE_RESERVATION_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Reservation (
        rnum INTEGER PRIMARY KEY NOT NULL,
        cid INTEGER NOT NULL REFERENCES Customer(id),
        fid INTEGER NOT NULL REFERENCES Flight(fnum),
        status TEXT NOT NULL CHECK (status IN ('W', 'C', 'R'))
    )";

/// Every table, in dependency order.
pub const CREATE_TABLES: [&str; 9] = [
    CREATE_PLANE_TABLE,
    CREATE_PILOT_TABLE,
    CREATE_TECHNICIAN_TABLE,
    CREATE_CUSTOMER_TABLE,
    CREATE_FLIGHT_TABLE,
    CREATE_FLIGHT_INFO_TABLE,
    CREATE_SCHEDULE_TABLE,
    CREATE_REPAIRS_TABLE,
    CREATE_RESERVATION_TABLE,
];

/// Indices backing the report and lookup joins.
pub const CREATE_INDICES: [&str; 4] = [
    "CREATE INDEX IF NOT EXISTS idx_flightinfo_flight ON FlightInfo(flight_id)",
    "CREATE INDEX IF NOT EXISTS idx_schedule_flight ON Schedule(flightNum)",
    "CREATE INDEX IF NOT EXISTS idx_repairs_plane ON Repairs(plane_id)",
    "CREATE INDEX IF NOT EXISTS idx_reservation_flight ON Reservation(fid, status)",
];

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

pub(crate) const INSERT_PLANE: &str =
    "INSERT INTO Plane (id, make, model, age, seats) VALUES (?1, ?2, ?3, ?4, ?5)";

pub(crate) const INSERT_PILOT: &str =
    "INSERT INTO Pilot (id, fullname, nationality) VALUES (?1, ?2, ?3)";

pub(crate) const INSERT_TECHNICIAN: &str =
    "INSERT INTO Technician (id, full_name) VALUES (?1, ?2)";

pub(crate) const INSERT_CUSTOMER: &str = r"
    INSERT INTO Customer (id, fname, lname, gtype, dob, address, phone, zipcode)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
";

pub(crate) const INSERT_FLIGHT: &str = r"
    INSERT INTO Flight
    (fnum, cost, num_sold, num_stops, actual_departure_date, actual_arrival_date,
     arrival_airport, departure_airport)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
";

pub(crate) const INSERT_FLIGHT_INFO: &str =
    "INSERT INTO FlightInfo (fiid, flight_id, pilot_id, plane_id) VALUES (?1, ?2, ?3, ?4)";

pub(crate) const INSERT_SCHEDULE: &str =
    "INSERT INTO Schedule (id, flightNum, departure_time, arrival_time) VALUES (?1, ?2, ?3, ?4)";

pub(crate) const INSERT_REPAIR: &str = r"
    INSERT INTO Repairs (rid, repair_date, repair_code, pilot_id, plane_id, technician_id)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
";

pub(crate) const INSERT_RESERVATION: &str =
    "INSERT INTO Reservation (rnum, cid, fid, status) VALUES (?1, ?2, ?3, ?4)";

pub(crate) const INCREMENT_SOLD: &str =
    "UPDATE Flight SET num_sold = num_sold + 1 WHERE fnum = ?1";

/// Seats left on a flight leaving on a given date.
///
/// Joins the plane assigned through `FlightInfo` with the flight and its
/// schedule row for that date.
pub(crate) const SELECT_AVAILABLE_SEATS: &str = r"
    SELECT P.seats - F.num_sold
    FROM Plane P
    JOIN FlightInfo FI ON FI.plane_id = P.id
    JOIN Flight F ON F.fnum = FI.flight_id
    JOIN Schedule S ON S.flightNum = F.fnum
    WHERE F.fnum = ?1
      AND F.actual_departure_date = ?2
      AND S.departure_time = ?2
    ORDER BY FI.fiid
    LIMIT 1
";

pub(crate) const SELECT_REPAIRS_PER_PLANE: &str = r"
    SELECT P.id AS plane_id, COUNT(R.rid) AS repairs
    FROM Plane P
    JOIN Repairs R ON R.plane_id = P.id
    GROUP BY P.id
    ORDER BY repairs DESC, P.id ASC
";

pub(crate) const SELECT_REPAIRS_PER_YEAR: &str = r"
    SELECT CAST(substr(repair_date, 1, 4) AS INTEGER) AS year, COUNT(rid) AS repairs
    FROM Repairs
    GROUP BY year
    ORDER BY repairs ASC, year ASC
";

pub(crate) const SELECT_PASSENGERS_WITH_STATUS: &str =
    "SELECT COUNT(*) FROM Reservation WHERE fid = ?1 AND status = ?2";
