/// Source string location
/// Requires `SourceManager` to decode
#[derive(PartialEq, Eq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct SourceLocation(u32);

impl SourceLocation {
    /// Source location that represents an unknown source
    pub const UNKNOWN: SourceLocation = SourceLocation(u32::MAX);

    /// Create first source location
    pub fn first() -> Self {
        SourceLocation(0)
    }

    /// Add an offset to a source location
    /// Expects the offset to be within range of the string
    pub fn offset(self, offset: u32) -> Self {
        if self == SourceLocation::UNKNOWN {
            self
        } else {
            SourceLocation(self.0 + offset)
        }
    }

    /// Get the raw integer inside the location
    pub fn get_raw(&self) -> u32 {
        self.0
    }
}

/// Owns all root signature strings loaded into the compiler
///
/// Each string is given a contiguous block of source locations so that a single [SourceLocation] identifies both the string and the offset inside it.
pub struct SourceManager {
    files: Vec<SourceFile>,
    next_location: SourceLocation,
}

impl SourceManager {
    /// Create a new source manager with no strings
    pub fn new() -> Self {
        SourceManager {
            files: Vec::new(),
            next_location: SourceLocation::first(),
        }
    }

    /// Add a root signature string into the source manager
    pub fn add_file(&mut self, file_name: FileName, contents: String) -> FileId {
        assert!(contents.len() < u32::MAX as usize);
        assert!(self.files.len() < u32::MAX as usize);
        let file_id = FileId(self.files.len() as u32);
        let file_size = contents.len() as u32;
        self.files.push(SourceFile {
            file_name,
            file_size,
            contents,
            base_location: self.next_location,
        });
        // Base location + size is used for the end of input token, so we reserve size + 1 slots
        self.next_location = self.next_location.offset(file_size + 1);
        file_id
    }

    /// Get the full source for a given string
    pub fn get_contents(&self, file_id: FileId) -> &str {
        &self.files[file_id.0 as usize].contents
    }

    /// Get the location of the first character of a string
    pub fn get_base_location(&self, file_id: FileId) -> SourceLocation {
        self.get_source_location_from_file_offset(file_id, StreamLocation(0))
    }

    /// Get the source location from a certain position in a string
    pub fn get_source_location_from_file_offset(
        &self,
        file_id: FileId,
        stream_location: StreamLocation,
    ) -> SourceLocation {
        let source_file = &self.files[file_id.0 as usize];
        assert!(stream_location.0 < source_file.file_size + 1);
        source_file.base_location.offset(stream_location.0)
    }

    /// Get the string id and offset from a source location
    pub fn get_file_offset_from_source_location(
        &self,
        source_location: SourceLocation,
    ) -> Option<(FileId, StreamLocation)> {
        self.files
            .iter()
            .enumerate()
            .find(|(_, source_file)| source_file.contains(source_location))
            .map(|(i, source_file)| {
                (
                    FileId(i as u32),
                    StreamLocation(source_location.0 - source_file.base_location.0),
                )
            })
    }

    /// Get the full file location information from a source location
    pub fn get_file_location(&self, source_location: SourceLocation) -> FileLocation {
        let (file_id, offset) = match self.get_file_offset_from_source_location(source_location) {
            Some(found) => found,
            None => return FileLocation::Unknown,
        };

        let source_file = &self.files[file_id.0 as usize];
        let mut line = Line::first();
        let mut column = Column::first();
        for c in &source_file.contents.as_bytes()[..(offset.0 as usize)] {
            match c {
                b'\n' => {
                    line.increment();
                    column = Column::first();
                }
                _ => column.increment(),
            }
        }
        FileLocation::Known(source_file.file_name.clone(), line, column)
    }

    /// Print the source line around an error location with the failing range underlined
    pub fn write_source_for_error(
        &self,
        f: &mut std::fmt::Formatter,
        source_location: SourceLocation,
        width: u32,
    ) -> std::fmt::Result {
        let (file_id, file_offset) =
            match self.get_file_offset_from_source_location(source_location) {
                Some(found) => found,
                None => return writeln!(f, "Invalid source"),
            };

        let contents = self.get_contents(file_id);
        let fail_index = file_offset.0 as usize;
        let (before, after) = contents.split_at(fail_index);
        let line_start = match before.rfind('\n') {
            Some(i) => i + 1,
            None => 0,
        };
        let line_end = fail_index + after.find('\n').unwrap_or(after.len());

        // Print source line
        writeln!(f, "{}", &contents[line_start..line_end])?;

        // Underline no further than the end of the line
        let width = std::cmp::min(width as usize, line_end - fail_index).max(1);
        let column = before[line_start..].chars().count();
        writeln!(f, "{}^{}", " ".repeat(column), "~".repeat(width - 1))
    }
}

impl Default for SourceManager {
    fn default() -> Self {
        Self::new()
    }
}

/// A buffer for a single loaded string
struct SourceFile {
    file_name: FileName,
    file_size: u32,
    contents: String,
    base_location: SourceLocation,
}

impl SourceFile {
    /// Check if a location is inside the string or on its end position
    fn contains(&self, location: SourceLocation) -> bool {
        location.0 >= self.base_location.0
            && location.0 < self.base_location.0 + self.file_size + 1
    }
}

/// A source string identifier
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileId(u32);

/// Name used to refer to a source string in diagnostics
#[derive(PartialEq, Debug, Clone)]
pub struct FileName(pub String);

/// A line number in a source string
#[derive(PartialEq, PartialOrd, Debug, Copy, Clone)]
pub struct Line(pub u32);

impl Line {
    /// Construct for the first line
    pub fn first() -> Self {
        Line(1)
    }

    /// Move to the next line
    pub fn increment(&mut self) {
        self.0 += 1
    }
}

/// The column index in a line
#[derive(PartialEq, PartialOrd, Debug, Copy, Clone)]
pub struct Column(pub u32);

impl Column {
    /// Construct for the first column
    pub fn first() -> Self {
        Column(1)
    }

    /// Move to the next column
    pub fn increment(&mut self) {
        self.0 += 1
    }
}

/// Fully qualified location
#[derive(PartialEq, Debug, Clone)]
pub enum FileLocation {
    Known(FileName, Line, Column),
    Unknown,
}

impl std::fmt::Display for FileLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self {
            FileLocation::Known(file_name, line, column) => {
                write!(f, "{}:{}:{}", file_name.0, line.0, column.0)
            }
            FileLocation::Unknown => write!(f, "<unknown>"),
        }
    }
}

/// The raw number of bytes from the start of a string
#[derive(PartialEq, PartialOrd, Debug, Copy, Clone)]
pub struct StreamLocation(pub u32);

#[test]
fn test_file_location() {
    let mut source_manager = SourceManager::new();
    let first = source_manager.add_file(FileName("a.rs".to_string()), "CBV(b0)".to_string());
    let second = source_manager.add_file(
        FileName("b.rs".to_string()),
        "RootFlags(0),\nSRV(t0)".to_string(),
    );

    assert_eq!(
        source_manager.get_base_location(first),
        SourceLocation::first()
    );
    assert_eq!(
        source_manager.get_base_location(second),
        SourceLocation::first().offset(8)
    );

    let srv = source_manager.get_source_location_from_file_offset(second, StreamLocation(14));
    assert_eq!(
        source_manager.get_file_location(srv),
        FileLocation::Known(FileName("b.rs".to_string()), Line(2), Column(1))
    );
    assert_eq!(
        source_manager.get_file_location(SourceLocation::UNKNOWN),
        FileLocation::Unknown
    );
}
